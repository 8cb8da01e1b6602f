mod generate;

use clap::Parser;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apigen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apigen")]
#[command(version)]
#[command(about = "Generate Express + Mongoose REST resources")]
pub(crate) struct Cli {
    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.generate.run()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resource_is_optional_for_clap() {
        // a missing resource is reported as a usage error, not by clap
        assert!(Cli::try_parse_from(["apigen"]).is_ok());
    }

    #[test]
    fn test_equals_forms() {
        let cli = Cli::try_parse_from([
            "apigen",
            "item",
            "--fields=price:number,active:boolean",
            "--preset=shop",
        ])
        .unwrap();
        assert_eq!(cli.generate.resource.as_deref(), Some("item"));
        assert_eq!(
            cli.generate.fields.as_deref(),
            Some("price:number,active:boolean")
        );
        assert_eq!(cli.generate.preset.as_deref(), Some("shop"));
    }
}
