use content_type::{parse_tree, ContentType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    let show_tree: bool = args.contains("-t") | args.contains("--tree");
    let header: Option<String> = args.opt_value_from_str("--header")?;

    let header = match header {
        Some(h) => h,
        None => promptly::prompt::<String, _>("Content-Type")?,
    };

    let tree = parse_tree(&header)?;
    if show_tree {
        println!("Tree: {:#?}", tree);
    }

    let parsed = ContentType::from(tree);
    println!("Parsed: {:#?}", parsed);
    println!("Canonical: {}", parsed);

    Ok(())
}
