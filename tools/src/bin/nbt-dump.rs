use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use nbtcodec::{DeOpts, StringEncoding, Value};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//
// Dump an NBT file of any compression to stdout, either as an indented tree or
// as JSON.
//

fn dump(name: Option<&str>, value: &Value, indent: usize) {
    let label = match name {
        Some(name) => format!("{:?}: ", name),
        None => String::new(),
    };

    match value {
        Value::Compound(c) => {
            println!("{:indent$}{}Compound ({} entries)", "", label, c.len(), indent = indent);
            for (k, v) in c {
                dump(Some(k.as_str()), v, indent + 4);
            }
        }
        Value::List(l) => {
            println!(
                "{:indent$}{}List of {:?} ({} entries)",
                "",
                label,
                l.element_tag(),
                l.len(),
                indent = indent
            );
            for v in l {
                dump(None, v, indent + 4);
            }
        }
        other => println!("{:indent$}{}{:?}", "", label, other, indent = indent),
    }
}

fn run(path: &str, json: bool, strings: StringEncoding) -> Result<()> {
    let data = std::fs::read(path)?;
    info!("read {} bytes from {}", data.len(), path);

    let root = nbtcodec::from_bytes_with_opts(&data, DeOpts::new().strings(strings))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        dump(Some(root.name.as_str()), &root.value, 0);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file. Handles gzip, zlib or no compression.")
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("print as JSON, losing the NBT types"),
        )
        .arg(
            Arg::with_name("strings")
                .long("strings")
                .takes_value(true)
                .possible_values(&["utf8", "cesu8"])
                .default_value("utf8"),
        )
        .get_matches();

    let strings = match matches.value_of("strings") {
        Some("cesu8") => StringEncoding::JavaCesu8,
        _ => StringEncoding::Utf8,
    };

    let path = matches.value_of("file").unwrap_or_default();

    if let Err(e) = run(path, matches.is_present("json"), strings) {
        error!("{}: {}", path, e);
        std::process::exit(1);
    }
}
