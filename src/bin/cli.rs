#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

use {
    std::{
        io::{
            prelude::*,
            stderr
        },
        path::Path,
        process
    },
    lessongen::{
        args::Args,
        backend::Backend,
        util::Error
    }
};

macro_rules! verbose_eprint {
    ($args:expr, $($fmt:tt)+) => {
        if $args.verbose {
            eprint!($($fmt)+);
            stderr().flush()?;
        }
    };
}

macro_rules! verbose_eprintln {
    ($args:expr, $($fmt:tt)+) => {
        if $args.verbose {
            eprintln!($($fmt)+);
        }
    };
}

fn print_usage() {
    println!("Usage: lessongen [options] [<lesson topic>]");
    println!();
    println!("Options:");
    println!("    --topic <text>          the lesson topic (same as the positional argument)");
    println!("    --district <text>       school district");
    println!("    --grade-level <text>    grade level");
    println!("    --subject-focus <text>  subject focus");
    println!("    --custom-prompt <text>  extra instructions for the generator");
    println!("    --num-slides <n>        number of slides, 1 to 10 (default: 3)");
    println!("    -v, --verbose           show progress on stderr");
    println!("    -h, --help              print this help");
    println!("    --version               print the version");
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = match Args::new()? {
        Args::Help => {
            print_usage();
            return Ok(());
        }
        Args::Version => {
            println!("lessongen version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Args::Regular(args) => args
    };
    let client = lessongen::client()?;
    verbose_eprint!(args, "[....] requesting presentation");
    match lessongen::run(&client, &Backend::production(), &args.form, Path::new(".")) {
        Ok(generated) => {
            verbose_eprintln!(args, "\r[ ok ] saved {}", generated.path.display());
            println!("{}", lessongen::SUCCESS_MESSAGE);
            Ok(())
        }
        Err(e) => {
            verbose_eprintln!(args, "\r[ !! ] request failed");
            eprintln!("{}", e);
            process::exit(1)
        }
    }
}
