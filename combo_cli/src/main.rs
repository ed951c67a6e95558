use std::path::Path;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use combo_cli::ComboCli;
use combo_cli::Commands;
use combo_cli::ModeArg;
use combo_cli::OutputFormat;
use combo_cli::format_documents;
use combo_cli::merge_arguments;
use combo_cli::validate_yaml;
use combo_core::Argument;
use combo_core::CancellationToken;
use combo_core::ComboConfig;
use combo_core::ComboError;
use combo_core::GenerationMode;
use combo_core::ParameterDomain;
use combo_core::TemplateEngine;
use combo_core::evaluate;
use combo_core::join_documents;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static USE_COLOR: AtomicBool = AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = ComboCli::parse();

	// Diagnostics go to stderr, so that is the stream whose support matters.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		USE_COLOR.store(false, Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Eval {
			file,
			replacements,
			mode,
			format,
			no_validate,
		}) => run_eval(&args, file, replacements, *mode, *format, *no_validate),
		None => {
			eprintln!("No subcommand specified. Run `combo --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<ComboError>() {
			Ok(combo_err) => {
				let report: miette::Report = (*combo_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `COMBO_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env("COMBO_LOG")
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(use_color)
				.with_target(false),
		)
		.try_init()
		.ok();
}

fn load_config(args: &ComboCli) -> Result<Option<ComboConfig>, ComboError> {
	if let Some(path) = &args.config {
		return ComboConfig::load_file(path).map(Some);
	}

	match &args.path {
		Some(root) => ComboConfig::load(root),
		None => ComboConfig::load(&std::env::current_dir()?),
	}
}

fn run_eval(
	args: &ComboCli,
	file: &Path,
	replacements: &[Argument],
	mode: Option<ModeArg>,
	format: OutputFormat,
	no_validate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let template = std::fs::read_to_string(file).map_err(ComboError::from)?;
	tracing::debug!(file = %file.display(), bytes = template.len(), "read template");

	if template.trim().is_empty() {
		return Err(ComboError::EmptyTemplate(file.display().to_string()).into());
	}

	if !no_validate {
		validate_yaml(&template, "template")?;
	}

	let config = load_config(args)?.unwrap_or_default();
	let mode = mode.map_or(config.mode, GenerationMode::from);
	let arguments = merge_arguments(config.arguments, replacements.to_vec());
	let domain = ParameterDomain::from_arguments(arguments)?;

	for name in TemplateEngine::new(&template).unreferenced_parameters(&domain) {
		eprintln!(
			"{} parameter `{name}` does not appear in the template",
			colored!("warning:", yellow)
		);
	}

	let documents = evaluate(&template, domain, mode, &CancellationToken::new())?;

	if !no_validate {
		validate_yaml(&join_documents(&documents), "output")?;
	}

	println!("{}", format_documents(&documents, format)?);

	Ok(())
}
