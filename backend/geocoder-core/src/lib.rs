pub mod error;
pub mod locator;
pub mod response;

#[cfg(test)]
mod tests;

pub const GEOCODER_HOSTNAME: &str = "geocode-maps.yandex.ru";
pub const GEOCODER_ENDPOINT: &str =
    const_format::concatcp!("https://", GEOCODER_HOSTNAME, "/1.x/");
