use log::{debug, info};
use std::path::Path;
use std::str::FromStr;

use crate::cache::LocalCache;
use crate::constants::{ADJECTIVES_FILE, ANIMALS_FILE};
use crate::errors::{Error, Result};
use crate::fetch::{AssetFetcher, Fetcher};
use crate::random::{LockedSource, RandomSource};
use crate::Configuration;

pub mod format;

// Where the animal lands among the three words of a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
  AnimalFirst = 1,
  AnimalSecond = 2,
  AnimalThird = 3,
}

impl Default for Order {
  fn default() -> Self {
    Order::AnimalThird
  }
}

impl From<i64> for Order {
  fn from(value: i64) -> Self {
    match value {
      1 => Order::AnimalFirst,
      2 => Order::AnimalSecond,
      _ => Order::AnimalThird,
    }
  }
}

// Never fails; anything unrecognized falls back to `AnimalThird`.
impl FromStr for Order {
  type Err = std::convert::Infallible;

  fn from_str(source: &str) -> std::result::Result<Self, Self::Err> {
    let order = match source.trim().to_lowercase().as_str() {
      "first" | "animal-first" | "1" => Order::AnimalFirst,
      "second" | "animal-second" | "2" => Order::AnimalSecond,
      _ => Order::AnimalThird,
    };

    Ok(order)
  }
}

pub struct Generator {
  adjectives: Vec<String>,
  animals: Vec<String>,
  random: Box<dyn RandomSource>,
}

impl Generator {
  // Loads both word lists from `<home>/.gfycat`, fetching any that are missing.
  pub fn new() -> Result<Self> {
    Generator::with_configuration(&Configuration::default())
  }

  pub fn with_configuration(config: &Configuration) -> Result<Self> {
    let fetcher = AssetFetcher::new(config);
    Generator::load(config.cache_path()?, &fetcher)
  }

  pub fn load<P: AsRef<Path>>(dir: P, fetcher: &dyn Fetcher) -> Result<Self> {
    let cache = LocalCache::new(dir, fetcher);
    let adjectives = cache.load_words(ADJECTIVES_FILE)?;
    let animals = cache.load_words(ANIMALS_FILE)?;

    info!(
      "loaded {} adjectives and {} animals",
      adjectives.len(),
      animals.len()
    );

    Generator::from_words(adjectives, animals, Box::new(LockedSource::from_time()))
  }

  pub fn from_words(
    adjectives: Vec<String>,
    animals: Vec<String>,
    random: Box<dyn RandomSource>,
  ) -> Result<Self> {
    if adjectives.is_empty() {
      return Err(Error::EmptyWordList(String::from(ADJECTIVES_FILE)));
    }

    if animals.is_empty() {
      return Err(Error::EmptyWordList(String::from(ANIMALS_FILE)));
    }

    Ok(Generator {
      adjectives,
      animals,
      random,
    })
  }

  pub fn reseed(&self, seed: u64) {
    self.random.reseed(seed);
  }

  // Two adjectives then one animal are drawn independently, then arranged per `order`.
  fn draw(&self, order: Order) -> [&str; 3] {
    let a = self.adjectives[self.random.index(self.adjectives.len())].as_str();
    let b = self.adjectives[self.random.index(self.adjectives.len())].as_str();
    let c = self.animals[self.random.index(self.animals.len())].as_str();

    debug!("drew ({}, {}, {}) for {:?}", a, b, c, order);

    match order {
      Order::AnimalFirst => [c, b, a],
      Order::AnimalSecond => [a, c, b],
      Order::AnimalThird => [a, b, c],
    }
  }

  pub fn generate_name(&self) -> String {
    self.generate_name_order(Order::AnimalThird)
  }

  pub fn generate_name_order(&self, order: Order) -> String {
    self.draw(order).concat()
  }

  // `template` should hold exactly three `%s` placeholders, e.g. "%s-%s-%s".
  pub fn generate_name_fmt(&self, template: &str) -> String {
    self.generate_name_order_fmt(template, Order::AnimalThird)
  }

  pub fn generate_name_order_fmt(&self, template: &str, order: Order) -> String {
    format::render(template, &self.draw(order))
  }
}

impl std::fmt::Debug for Generator {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      formatter,
      "Generator<adjectives:{}, animals:{}>",
      self.adjectives.len(),
      self.animals.len()
    )
  }
}
