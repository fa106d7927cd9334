pub(crate) mod embeds;
pub(crate) mod messages;
pub mod mute;
pub mod slowmode;
pub mod unmute;
