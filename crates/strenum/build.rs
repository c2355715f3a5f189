fn main() {
	println!("cargo:rerun-if-env-changed=STRENUM_MAX_SEARCH_SIZE");

	if let Ok(value) = std::env::var("STRENUM_MAX_SEARCH_SIZE")
		&& value.trim().parse::<usize>().is_err()
	{
		println!(
			"cargo:warning=STRENUM_MAX_SEARCH_SIZE={value:?} is not a decimal integer; strenum will fail to compile"
		);
	}
}
