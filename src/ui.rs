//! Central embed style constants and helpers.
use serenity::builder::CreateEmbed;

pub const COLOR_SUCCESS: u32 = 0x00FF00; // Green
pub const COLOR_ALERT: u32 = 0xFF0000; // Red
pub const COLOR_INFO: u32 = 0x3498DB; // Blue

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

pub fn success_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_SUCCESS)
}

pub fn info_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_INFO)
}
