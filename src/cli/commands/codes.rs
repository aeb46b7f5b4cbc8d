use super::CommandHandler;
use crate::engine::{self, RandomSource};
use crate::Result;
use async_trait::async_trait;

/// Handler for the `codes` command
pub struct CodesCommand {
    pub shuffled: bool,
    random: RandomSource,
}

impl CodesCommand {
    pub fn new(shuffled: bool) -> Self {
        Self::with_random(shuffled, RandomSource::entropy())
    }

    pub fn with_random(shuffled: bool, random: RandomSource) -> Self {
        Self { shuffled, random }
    }

    /// The codes on one line, space separated
    pub fn render(&self) -> String {
        let mut codes = engine::create_default_codes();
        if self.shuffled {
            engine::shuffle(&mut self.random.rng(), &mut codes);
        }
        codes.join(" ")
    }
}

#[async_trait]
impl CommandHandler for CodesCommand {
    async fn execute(&self) -> Result<()> {
        println!("{}", self.render());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "codes"
    }
}
