use cartscope::block_cache::LoadStatus;
use cartscope::config::InspectorConfig;
use cartscope::session::CartSession;
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

fn usage(program: &str) {
    eprintln!("Usage: {} [options] <rom-file>", program);
    eprintln!("\nOptions:");
    eprintln!("  -v                 Verbose cart info");
    eprintln!("  -i                 Print cart info only");
    eprintln!("  --bank N           List only PRG bank N");
    eprintln!("  --no-elide         List every instruction, including repeats");
    eprintln!("  --chr-export DIR   Write CHR banks as tile sheet PNGs into DIR");
    eprintln!("  --scale N          CHR sheet scale (1-10)");
    eprintln!("  --prefix NAME      CHR sheet file prefix");
    eprintln!("  --config FILE      Load settings from a TOML file");
    eprintln!("  -h                 Show this help message");
}

fn option_value<'a>(args: &'a [String], i: usize) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", args[i]);
            std::process::exit(1);
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value for {}: {}", flag, value);
        std::process::exit(1);
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut verbose = None;
    let mut info_only = false;
    let mut bank = None;
    let mut no_elide = false;
    let mut chr_folder = None;
    let mut scale = None;
    let mut prefix = None;
    let mut config_path = None;
    let mut filename = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-v" => verbose = Some(true),
            "-i" => info_only = true,
            "--no-elide" => no_elide = true,
            "--bank" => {
                bank = Some(parse_number::<usize>("--bank", option_value(&args, i)));
                i += 1;
            }
            "--chr-export" => {
                chr_folder = Some(PathBuf::from(option_value(&args, i)));
                i += 1;
            }
            "--scale" => {
                scale = Some(parse_number::<u32>("--scale", option_value(&args, i)));
                i += 1;
            }
            "--prefix" => {
                prefix = Some(option_value(&args, i).to_string());
                i += 1;
            }
            "--config" => {
                config_path = Some(PathBuf::from(option_value(&args, i)));
                i += 1;
            }
            "-h" | "--help" => {
                usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                filename = Some(arg.to_string());
                break;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let filename = filename.unwrap_or_else(|| {
        usage(&args[0]);
        std::process::exit(1);
    });

    let mut config = match &config_path {
        Some(path) => InspectorConfig::load(path)?,
        None => InspectorConfig::default(),
    };
    if no_elide {
        config.listing.verbose_listing = true;
    }
    if let Some(prefix) = prefix {
        config.chr.export_prefix = prefix;
    }
    let verbose = verbose.unwrap_or(config.listing.verbose_info);
    debug!("config: {:?}", config);

    let mut session = CartSession::open(Path::new(&filename), config)?;
    print!("{}", session.info_text(verbose));
    if info_only {
        return Ok(());
    }

    if let Some(folder) = chr_folder {
        let mut export = session.chr_export();
        if let Some(scale) = scale {
            export.set_scale(scale)?;
        }
        export.select_folder(Some(folder));
        export.export();
        let state = export.command_mut().wait(std::time::Instant::now()).clone();
        match export.command().error() {
            Some(err) => return Err(Box::new(err.clone())),
            None => {
                debug!("chr export finished: {:?}", state);
                print!("{}", export.report().unwrap_or_default());
            }
        }
        return Ok(());
    }

    println!();
    print!("{}", session.cart().listing_header(session.name()));
    let banks: Vec<usize> = match bank {
        Some(index) => vec![index],
        None => {
            session.preload_listings();
            (0..session.cart().prg_banks()).collect()
        }
    };
    for index in banks {
        println!();
        match session.listing_for(index) {
            LoadStatus::Failed(err) => return Err(Box::new(err)),
            _ => print!("{}", session.listing_text(index)?),
        }
    }

    Ok(())
}
