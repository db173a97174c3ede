use crate::utils::DefaultRandom;
use std::fs::File;
use std::io::BufReader;


pub fn create_test_random() -> DefaultRandom {
    DefaultRandom::new_repeatable(0)
}

pub fn get_test_resource(resource_path: &str) -> std::io::Result<BufReader<File>> {
    let mut path = std::env::current_dir()?;
    path.push("tests/resources");
    path.push(resource_path);

    File::open(path).map(BufReader::new)
}
