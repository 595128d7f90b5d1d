use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use stoat_sat::{config::Config, context::Context, reports::Report, types::err};

pub fn load_dimacs(path: &PathBuf, config: &Config) -> Result<Context, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    Context::from_dimacs(BufReader::new(&file), config.clone())
}

pub fn cnf_lib_subdir(dirs: Vec<&str>) -> PathBuf {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).join("cnf");
    for dir in dirs {
        path = path.join(dir);
    }
    path
}

pub fn silent_formula_report(path: PathBuf, config: &Config) -> Report {
    let mut ctx = match load_dimacs(&path, config) {
        Ok(context) => context,
        Err(err::ErrorKind::Build(err::BuildError::EmptyClause(_))) => {
            return Report::Unsatisfiable;
        }
        Err(_) => {
            panic!("c Error loading file {path:?}")
        }
    };

    match ctx.solve() {
        Ok(_) => {}
        Err(e) => panic!("{e:?}"),
    }

    ctx.report()
}

pub fn silent_on_directory(subdir: PathBuf, config: &Config, require: Report) -> usize {
    let mut count = 0;

    let pattern = subdir.join("*.cnf");
    let paths = glob::glob(pattern.to_str().expect("invalid corpus path"))
        .expect("invalid corpus pattern");

    for entry in paths.flatten() {
        assert_eq!(require, silent_formula_report(entry, config));
        count += 1;
    }

    count
}
