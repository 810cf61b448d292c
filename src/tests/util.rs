use std::{
	io::{self, BufRead, BufReader},
	fs::{self, File},
	path::{Path, PathBuf},
};


/// Call `test` for every line of every file under `path`, relative to the crate root.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, usize, &str),
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, usize, &str),
	{
		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				run(&path, test)?;
			} else {
				let file = BufReader::new(File::open(&path)?);

				for (ix, line) in file.lines().enumerate() {
					test(&path, ix + 1, &line?);
				}
			}
		}

		Ok(())
	}

	run(&dir, &mut test)
}
