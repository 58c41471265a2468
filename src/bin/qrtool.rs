use clap::{Parser, Subcommand};
use qrcraft::tools::{read_payloads, tally};
use qrcraft::{ContentRecord, PayloadRequest, canonical_payload, classify_batch, classify_raw};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QRCraft payload tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single payload
    Classify {
        text: String,
        #[arg(long)]
        json: bool,
    },
    /// Classify every payload in a file (blank-line separated)
    Batch {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Count payload types in a file
    Stats {
        #[arg(long)]
        file: PathBuf,
    },
    /// Build a payload the way the create screens do
    Create {
        #[command(subcommand)]
        form: CreateForm,
    },
}

#[derive(Subcommand)]
enum CreateForm {
    /// Plain text
    Text { text: String },
    /// Web link
    Link { url: String },
    /// Phone number
    Phone { number: String },
    /// Coordinates
    Geo {
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lng: String,
    },
    /// Wi-Fi network
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        encryption: String,
    },
    /// Contact card
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

impl From<CreateForm> for PayloadRequest {
    fn from(form: CreateForm) -> Self {
        match form {
            CreateForm::Text { text } => PayloadRequest::Text { text },
            CreateForm::Link { url } => PayloadRequest::Link { url },
            CreateForm::Phone { number } => PayloadRequest::Phone { number },
            CreateForm::Geo { lat, lng } => PayloadRequest::Geo {
                latitude: lat,
                longitude: lng,
            },
            CreateForm::Wifi {
                ssid,
                password,
                encryption,
            } => PayloadRequest::WiFi {
                ssid,
                password,
                encryption,
            },
            CreateForm::Contact { name, email, phone } => {
                PayloadRequest::Contact { name, email, phone }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { text, json } => classify_cmd(&text, json),
        Command::Batch { file, json } => batch_cmd(&file, json),
        Command::Stats { file } => stats_cmd(&file),
        Command::Create { form } => create_cmd(form.into()),
    }
}

fn print_record(record: &ContentRecord, json: bool) {
    if json {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("Failed to serialize record: {err}"),
        }
        return;
    }
    println!("{}", record.display_name());
    for line in record.lines() {
        println!("  {line}");
    }
}

fn classify_cmd(text: &str, json: bool) -> ExitCode {
    print_record(&classify_raw(text), json);
    ExitCode::SUCCESS
}

fn batch_cmd(file: &Path, json: bool) -> ExitCode {
    let payloads = match read_payloads(file) {
        Ok(payloads) => payloads,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let records = classify_batch(&payloads);
    let elapsed = start.elapsed();

    for (i, record) in records.iter().enumerate() {
        if !json {
            print!("[{i}] ");
        }
        print_record(record, json);
    }
    if !json {
        println!("Classified {} payloads ({:.2?})", records.len(), elapsed);
    }
    ExitCode::SUCCESS
}

fn stats_cmd(file: &Path) -> ExitCode {
    let payloads = match read_payloads(file) {
        Ok(payloads) => payloads,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };
    if payloads.is_empty() {
        println!("No payloads found in {}", file.display());
        return ExitCode::SUCCESS;
    }

    let records = classify_batch(&payloads);
    let tally = tally(&records);
    println!("Payloads: {}", tally.total());
    for (content_type, count) in tally.iter() {
        let share = count as f64 / tally.total() as f64 * 100.0;
        println!("  {:<12} {:>6} ({:.1}%)", content_type.label(), count, share);
    }
    ExitCode::SUCCESS
}

fn create_cmd(request: PayloadRequest) -> ExitCode {
    let render = match request.render_request() {
        Ok(render) => render,
        Err(err) => {
            eprintln!("Cannot create {}: {}", request.content_type(), err);
            return ExitCode::FAILURE;
        }
    };

    println!("Payload: {:?}", render.payload);
    println!(
        "Render: size={}px margin={} error_correction={:?}",
        render.options.size, render.options.margin, render.options.error_correction
    );

    let record = classify_raw(&render.payload);
    if record.content_type() != request.content_type() {
        log::warn!(
            "payload classifies as {} instead of {}",
            record.content_type(),
            request.content_type()
        );
    }
    print_record(&record, false);
    if let Some(canonical) = canonical_payload(&record) {
        println!("Canonical: {canonical:?}");
    }
    ExitCode::SUCCESS
}
