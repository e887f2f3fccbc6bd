use log::Level;

pub const MEDIA_HOST: &str = "https://v0.blob.com";

pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn media_url(file: &str) -> String {
    format!("{}/{}", MEDIA_HOST, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_joins_host_and_file() {
        assert_eq!(
            media_url("awards-background.mp4"),
            "https://v0.blob.com/awards-background.mp4"
        );
    }
}
