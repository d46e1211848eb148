use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod bootstrap;
mod cli;
mod config_warnings;
mod invoke;
mod output;

use invoke::{InvocationHandler, Outcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let result = run().await;
    ExitCode::from(report(result, &mut std::io::stderr()))
}

/// Exit status for a finished run, printing the error chain of a failure.
fn report<E: Write>(result: anyhow::Result<Outcome>, err: &mut E) -> u8 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(error) => {
            // Nothing else can be reported if stderr itself is gone.
            let _ = writeln!(err, "jirasum error: {error:#}");
            1
        }
    }
}

async fn run() -> anyhow::Result<Outcome> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let handler = InvocationHandler::new(flags.format);
    handler
        .run(
            cli.command.as_deref(),
            cli.issue_key.as_deref(),
            || bootstrap::load_config(&flags),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("JIRASUM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jirasum_config::JirasumConfig;
    use jirasum_core::UsageError;
    use pretty_assertions::assert_eq;

    use super::report;
    use crate::cli::OutputFormat;
    use crate::invoke::{InvocationHandler, Outcome};

    /// A local address with nothing listening on it.
    fn refused_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }

    #[tokio::test]
    async fn transport_failure_prints_error_chain_and_exits_one() {
        let base_url = refused_base_url();
        let config = JirasumConfig::default()
            .with_base_url(&base_url)
            .expect("valid base url");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = InvocationHandler::new(OutputFormat::Text)
            .run(
                Some("fetch_jira"),
                Some("ABC-1"),
                move || Ok(config),
                &mut stdout,
                &mut stderr,
            )
            .await;

        let mut reported = Vec::new();
        let code = report(result, &mut reported);
        let reported = String::from_utf8(reported).expect("utf8 stderr");

        assert_eq!(code, 1);
        assert!(
            reported.starts_with(&format!(
                "jirasum error: fetch_jira request for ABC-1 to {base_url}/v1/tools/call failed: "
            )),
            "unexpected report: {reported}"
        );
        assert!(reported.ends_with('\n'));
        assert!(stdout.is_empty());
    }

    #[test]
    fn outcomes_keep_their_exit_codes_and_print_nothing() {
        let mut reported = Vec::new();
        assert_eq!(report(Ok(Outcome::Success), &mut reported), 0);
        assert_eq!(
            report(Ok(Outcome::Usage(UsageError::MissingCommand)), &mut reported),
            2
        );
        assert_eq!(
            report(
                Ok(Outcome::Remote {
                    status: 500,
                    body: "internal error".into()
                }),
                &mut reported
            ),
            1
        );
        assert!(reported.is_empty());
    }
}
