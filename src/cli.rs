// src/cli.rs
use std::io::{self, Write};

use crate::{
    Error, Result, Show,
    config::options::AppOptions,
    directory::TvMaze,
    progress::Progress,
    session::Session,
    store::{FileStorage, MemoryStorage, Storage},
};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub search: Option<String>,
    pub toggle: Vec<u64>,
    pub remove: Vec<u64>,
    pub reset: bool,
    pub list: bool,
    pub api: Option<String>,
    pub store: Option<String>,
    pub no_persist: bool,
    pub help: bool,
}

impl Params {
    /// Fold CLI overrides into options built from defaults + env.
    pub fn apply_to(&self, opts: &mut AppOptions) {
        if let Some(api) = &self.api {
            opts.api.set_base_url(api);
        }
        if let Some(dir) = &self.store {
            opts.store.dir = dir.into();
        }
        if self.no_persist {
            opts.store.persist = false;
        }
    }
}

pub fn parse_args<I, S>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter().map(|s: S| -> String { s.into() });

    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--search" => params.search = Some(value(&mut args, &a)?),
            "-t" | "--toggle" => params.toggle.push(parse_id(&value(&mut args, &a)?)?),
            "-r" | "--remove" => params.remove.push(parse_id(&value(&mut args, &a)?)?),
            "--reset" => params.reset = true,
            "-l" | "--list" => params.list = true,
            "--api" => params.api = Some(value(&mut args, &a)?),
            "--store" => params.store = Some(value(&mut args, &a)?),
            "--no-persist" => params.no_persist = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(Error::Usage(format!("Unknown arg: {}", a))),
        }
    }

    let does_something = params.search.is_some()
        || !params.toggle.is_empty()
        || !params.remove.is_empty()
        || params.reset
        || params.list;
    if !does_something && !params.help {
        return Err(Error::Usage(s!("Nothing to do; see --help")));
    }
    Ok(params)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Usage(format!("Missing value for {}", flag)))
}

fn parse_id(s: &str) -> Result<u64> {
    s.trim().parse().map_err(|_| Error::Usage(format!("Invalid show id: {}", s)))
}

pub fn run(params: Params) -> Result<()> {
    if params.help {
        println!("{HELP}");
        return Ok(());
    }

    let mut opts = AppOptions::from_env();
    params.apply_to(&mut opts);
    crate::log::init(opts.store.log_path());

    let storage: Box<dyn Storage> = if opts.store.persist {
        Box::new(FileStorage::new(opts.store.dir.clone()))
    } else {
        Box::new(MemoryStorage::new())
    };

    let mut session = Session::new(storage);
    if let Err(e) = session.load() {
        loge!("CLI: Favorites not loaded: {}", e);
        eprintln!("Warning: {e}; starting with no favorites");
    }

    let directory = TvMaze::new(&opts.api)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&params, &mut session, &directory, &mut out)
}

/// Everything after setup; split out so it can run against any directory/sink.
pub fn execute(
    params: &Params,
    session: &mut Session,
    directory: &dyn crate::directory::Directory,
    out: &mut dyn Write,
) -> Result<()> {
    if params.reset {
        session.reset()?;
    }

    if let Some(q) = &params.search {
        let mut prog = CliProgress::default();
        session.search(directory, q, Some(&mut prog))?;
    }

    for &id in &params.toggle {
        session.toggle(id)?;
    }

    for &id in &params.remove {
        if session.remove(id)?.is_none() {
            eprintln!("Show {} is not a favorite", id);
        }
    }

    if params.search.is_some() {
        write_rows(out, session.results())?;
    }
    if params.list {
        if params.search.is_some() {
            writeln!(out)?;
        }
        write_rows(out, session.favorites().as_slice())?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_rows(out: &mut dyn Write, shows: &[Show]) -> io::Result<()> {
    for show in shows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            show.id,
            show.name,
            show.image,
            if show.favorite { "*" } else { "" }
        )?;
    }
    Ok(())
}

/// Progress on stderr so stdout stays machine-readable.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _id: u64) {
        self.done += 1;
    }
    fn finish(&mut self) {
        eprintln!("Found {} show(s)", self.done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_ids() {
        let p = parse_args(["-t", "1", "--toggle", "2", "-r", "3"]).unwrap();
        assert_eq!(p.toggle, vec![1, 2]);
        assert_eq!(p.remove, vec![3]);
    }

    #[test]
    fn rejects_unknown_and_missing() {
        assert!(matches!(parse_args(["--bogus"]), Err(Error::Usage(_))));
        assert!(matches!(parse_args(["--search"]), Err(Error::Usage(_))));
        assert!(matches!(parse_args(["-t", "abc"]), Err(Error::Usage(_))));
        assert!(matches!(parse_args(Vec::<String>::new()), Err(Error::Usage(_))));
    }

    #[test]
    fn overrides_apply_to_options() {
        let p = parse_args(["--list", "--api", "http://x/", "--store", "tmp", "--no-persist"]).unwrap();
        let mut opts = AppOptions::default();
        p.apply_to(&mut opts);
        assert_eq!(opts.api.base_url(), "http://x");
        assert_eq!(opts.store.dir, std::path::PathBuf::from("tmp"));
        assert!(!opts.store.persist);
    }
}
