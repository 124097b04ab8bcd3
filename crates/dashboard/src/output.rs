use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn format<T: Serialize>(
        self,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> anyhow::Result<String> {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Table => render(value),
        })
    }

    pub fn print<T: Serialize>(self, value: &T, render: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        println!("{}", self.format(value, render)?);
        Ok(())
    }
}
