use validarfc_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default configuration to `~/validarfc/config.json`. An
/// existing file is never overwritten.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Point database.url at your PostgreSQL instance (or set DATABASE_URL)");
        println!("   2. Run 'validarfc serve' to start the API");
        println!();
        println!("🔧 Configuration options:");
        println!("   - validation.format: \"lexical\" (default) or \"strict\" (date-checked)");
        println!("   - validation.max_batch: RFCs accepted per bulk request");
        println!("   - history.max_per_page: upper bound on per_page");
        println!();
        Ok(())
    }
}
