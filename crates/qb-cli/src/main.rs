use qb_core::TranspileOptions;
use qb_io::BridgeJob;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        std::process::exit(2);
    };

    let result = match command {
        "transform" => transform_command(&args),
        _ => {
            print_usage();
            Err(format!("unknown command `{command}`"))
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  qbridge transform --input <file.qtbridge|file.metadata> --out <dir>");
    eprintln!("                    [--readable-ids] [--unique-ids] [--anchors]");
    eprintln!("                    [--object-names] [--fonts]");
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).cloned()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn transform_command(args: &[String]) -> Result<(), String> {
    let input = parse_flag_value(args, "--input").map(PathBuf::from).ok_or_else(|| {
        print_usage();
        "missing --input".to_string()
    })?;
    let out_dir = parse_flag_value(args, "--out").map(PathBuf::from).ok_or_else(|| {
        print_usage();
        "missing --out".to_string()
    })?;

    let options = TranspileOptions {
        assign_readable_ids: has_flag(args, "--readable-ids"),
        force_unique_ids: has_flag(args, "--unique-ids"),
        apply_anchors: has_flag(args, "--anchors"),
        emit_object_names: has_flag(args, "--object-names"),
        download_fonts: has_flag(args, "--fonts"),
    };

    let job = BridgeJob {
        input,
        out_dir,
        options,
    };
    let report = job
        .run()
        .map_err(|err| format!("transformation failed: {err}"))?;

    for path in &report.written {
        println!("wrote {}", path.display());
    }
    for (name, err) in &report.write_failures {
        eprintln!("failed to write `{name}`: {err}");
    }
    if !report.fonts.is_empty() {
        println!(
            "fonts referenced: {}",
            report
                .fonts
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!("done — output in {}", report.project_dir.display());

    if report.write_failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} document(s) could not be written",
            report.write_failures.len()
        ))
    }
}
