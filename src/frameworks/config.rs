use std::{env, path::PathBuf, time::Duration};

// Runtime configuration read from the environment (after `.env` is loaded).

pub fn http_port() -> u16 {
    env::var("QR_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn image_fetch_timeout() -> Duration {
    let millis = env::var("IMAGE_FETCH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

pub fn scratch_dir() -> PathBuf {
    env::var("QR_SCRATCH_DIR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("qr_decode_server"))
}
