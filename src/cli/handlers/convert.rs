use crate::cli::{
    args::ConvertArgs,
    commands::{format_values, parse_values, read_input_text},
};
use bech32_text::convert_bits;

pub fn handle(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values = if args.values.is_empty() {
        parse_values(&[read_input_text(None)?])?
    } else {
        parse_values(&args.values)?
    };

    let converted = convert_bits(&values, args.from, args.to, args.pad)?;
    println!("{}", format_values(&converted));

    Ok(())
}
