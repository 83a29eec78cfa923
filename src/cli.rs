use std::{
    ffi::OsString,
    io::{self, Write},
};

use clap::{App, AppSettings, Arg};
use log::debug;
use serde::Serialize;

use crate::{
    config::{self, Config},
    error::{Error, Result},
    form::PasswordForm,
    password::{CharacterClass, ClassSet, GeneratedPassword, Generator},
};

const CLASS_FLAGS: [(&str, CharacterClass); 4] = [
    ("uppercase", CharacterClass::Uppercase),
    ("lowercase", CharacterClass::Lowercase),
    ("numbers", CharacterClass::Digit),
    ("symbols", CharacterClass::Symbol),
];

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("pwform")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Protoshark <protoshark@pm.me>")
        .about("Generate a random password from selected character classes")
        .after_help(
            "NOTE: Lowercase letters are used when no class is selected. \
             The length and seed defaults can be set with the PWFORM_LENGTH \
             and PWFORM_SEED environment variables",
        )
        .setting(AppSettings::DisableHelpSubcommand)
        .arg(Arg::with_name("length")
                .long("length")
                .short("l")
                .value_name("LENGTH")
                .help("The password length, from 4 to 16")
                .takes_value(true)
                .display_order(0)
        ).arg(Arg::with_name("lowercase")
                .long("lowercase")
                .short("a")
                .help("Include lowercase letters")
                .display_order(1)
        ).arg(Arg::with_name("uppercase")
                .long("uppercase")
                .short("u")
                .help("Include uppercase letters")
                .display_order(2)
        ).arg(Arg::with_name("numbers")
                .long("numbers")
                .short("n")
                .help("Include digits")
                .display_order(3)
        ).arg(Arg::with_name("symbols")
                .long("symbols")
                .short("s")
                .help("Include symbols")
                .display_order(4)
        ).arg(Arg::with_name("classes")
                .long("classes")
                .value_name("LIST")
                .help("Comma separated classes to include (upper, lower, digits, symbols)")
                .takes_value(true)
                .use_delimiter(true)
                .multiple(true)
                .display_order(5)
        ).arg(Arg::with_name("count")
                .long("count")
                .short("c")
                .value_name("COUNT")
                .help("How many passwords to generate")
                .default_value("1")
                .takes_value(true)
                .display_order(6)
        ).arg(Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed the generator for reproducible output")
                .takes_value(true)
                .display_order(7)
        ).arg(Arg::with_name("json")
                .long("json")
                .help("Print one JSON object per password")
                .display_order(8)
        )
}

pub struct CLI<'a>(clap::ArgMatches<'a>);

impl<'a> CLI<'a> {
    pub fn from_args() -> Self {
        Self(app().get_matches())
    }

    pub fn from_iter<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        app()
            .get_matches_from_safe(args)
            .map(Self)
            .map_err(|error| Error::Cli(error.message))
    }

    /// Merge the command line with the environment config
    pub fn options(&self, config: &Config) -> Result<Options> {
        let args = &self.0;

        let length = args
            .value_of("length")
            .map(String::from)
            .or_else(|| config.length.clone())
            .unwrap_or_default();

        let mut flagged: ClassSet = CLASS_FLAGS
            .iter()
            .filter(|(name, _)| args.is_present(name))
            .map(|(_, class)| *class)
            .collect();
        for name in args.values_of("classes").into_iter().flatten() {
            flagged.insert(name.parse::<CharacterClass>()?);
        }
        let classes = if flagged.is_empty() {
            PasswordForm::default().classes()
        } else {
            flagged
        };

        let count = match args.value_of("count") {
            Some(count) => match count.parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => return Err(Error::Cli(format!("Invalid count: {}", count))),
            },
            None => 1,
        };

        let seed = match args.value_of("seed") {
            Some(seed) => Some(config::parse_seed(seed)?),
            None => config.seed,
        };

        Ok(Options {
            length,
            classes,
            count,
            seed,
            json: args.is_present("json"),
        })
    }

    pub fn run(self) -> Result<()> {
        let config = Config::from_env()?;
        debug!("config: {:?}", config);

        let options = self.options(&config)?;
        let stdout = io::stdout();
        options.write(&mut stdout.lock())
    }
}

/// Everything needed for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub length: String,
    pub classes: ClassSet,
    pub count: usize,
    pub seed: Option<u64>,
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    password: &'a GeneratedPassword,
    length: usize,
    classes: Vec<CharacterClass>,
}

impl Options {
    /// Generate `count` passwords and write them to `out`, one per line
    pub fn write<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut form = PasswordForm::new();
        form.set_length(self.length.as_str());
        form.set_classes(self.classes);
        let request = form.validate()?;

        let mut generator = match self.seed {
            Some(seed) => Generator::seeded(seed),
            None => Generator::os(),
        };

        for _ in 0..self.count {
            let password = generator.password(&request)?;

            if self.json {
                let report = Report {
                    password: &password,
                    length: password.len(),
                    classes: request.classes.iter().collect(),
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", password)?;
            }
        }

        Ok(())
    }
}
