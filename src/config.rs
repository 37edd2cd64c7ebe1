use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Reveal trigger: the viewport is shrunk by this many pixels on every side.
pub const TRIGGER_MARGIN_PX: u32 = 100;

// Stagger timings in seconds.
pub const DELAY_CHILDREN: f64 = 0.1;
pub const STAGGER_CHILDREN: f64 = 0.15;
pub const SECTION_FADE: f64 = 0.6;

pub const FADE_IN_UP_DURATION: f64 = 0.8;
pub const FADE_IN_UP_OFFSET_PX: f64 = 40.0;
pub const FADE_IN_DURATION: f64 = 0.6;

// Hero scroll transforms: (domain, range) in pixels / opacity.
pub const PARALLAX_DOMAIN: [f64; 2] = [0.0, 500.0];
pub const PARALLAX_RANGE: [f64; 2] = [0.0, 150.0];
pub const HERO_FADE_DOMAIN: [f64; 2] = [0.0, 400.0];
pub const HERO_FADE_RANGE: [f64; 2] = [1.0, 0.0];

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const RESTAURANT_NAME: &str = "料亭 寿司忠";
pub const PHONE: &str = "0493-72-0018";
pub const POSTAL_CODE: &str = "〒355-0328";
pub const ADDRESS: &str = "埼玉県比企郡小川町大塚48";

pub fn tel_href() -> String {
    format!("tel:{}", PHONE)
}

pub fn maps_link_url() -> String {
    format!("https://maps.google.com/maps?q={}", urlencoding::encode(ADDRESS))
}

pub fn maps_embed_url() -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=15&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(ADDRESS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_keeps_dashes() {
        assert_eq!(tel_href(), "tel:0493-72-0018");
    }

    #[test]
    fn map_urls_percent_encode_the_address() {
        let embed = maps_embed_url();
        assert!(embed.starts_with(
            "https://maps.google.com/maps?q=%E5%9F%BC%E7%8E%89%E7%9C%8C"
        ));
        assert!(embed.ends_with("&output=embed"));
        assert!(!maps_link_url().contains("埼玉"));
    }

    #[test]
    fn transform_domains_are_increasing() {
        assert!(PARALLAX_DOMAIN[0] < PARALLAX_DOMAIN[1]);
        assert!(HERO_FADE_DOMAIN[0] < HERO_FADE_DOMAIN[1]);
    }
}
