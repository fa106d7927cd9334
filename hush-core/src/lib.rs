pub mod settings;

pub use settings::Settings;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub settings: Settings,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
