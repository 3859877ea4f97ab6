extern crate dotenv;
extern crate gumdrop;

use gumdrop::{parse_args_default_or_exit, Options as Gumdrop};
use log::{debug, info, warn};
use std::env::args;
use std::process::exit;

use gfycat::{version, Configuration, Generator, Order};

#[derive(Debug, Gumdrop)]
struct Options {
  #[options(help = "configuration json file")]
  config: Configuration,

  #[options(help = "where the animal goes: first, second or third")]
  order: Order,

  #[options(help = "template with three %s placeholders, e.g. %s-%s-%s")]
  format: Option<String>,

  #[options(short = "n", help = "how many names to print", default = "1")]
  count: usize,

  #[options(help = "seed the generator for repeatable output")]
  seed: Option<u64>,

  #[options(help = "display the help text")]
  help: bool,

  #[options(help = "print the version and exit")]
  version: bool,
}

fn main() {
  env_logger::builder().format_timestamp_millis().init();

  if let Err(e) = dotenv::dotenv() {
    debug!("unable to load .env - {}", e);
  }

  let opts = parse_args_default_or_exit::<Options>();

  if opts.version {
    let args = args().collect::<Vec<_>>();
    println!("{} version - {}", args[0], version::version());
    exit(0);
  }

  debug!("loading word lists with {:?}", opts.config);

  let generator = match Generator::with_configuration(&opts.config) {
    Ok(generator) => generator,
    Err(e) => {
      warn!("[error] unable to load word lists: {}", e);
      eprintln!("{}", e);
      exit(1);
    }
  };

  if let Some(seed) = opts.seed {
    info!("reseeding generator with {}", seed);
    generator.reseed(seed);
  }

  for _ in 0..opts.count {
    let name = match &opts.format {
      Some(template) => generator.generate_name_order_fmt(template, opts.order),
      None => generator.generate_name_order(opts.order),
    };

    println!("{}", name);
  }
}
