use crate::cli::{
    args::EncodeArgs,
    commands::{read_input_bytes, read_input_text},
    config::resolve_encode_hrp,
};
use bech32_text::{HrpRegistry, convert_bits, encode_with_variant};
use tracing::debug;

pub fn handle(
    args: EncodeArgs,
    config: &HrpRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_encode_hrp(
        config,
        args.hrp.as_deref(),
        args.preset.as_deref(),
        args.variant.map(Into::into),
    )?;

    // Step 1: Read input bytes (hex text or raw)
    let data = if args.hex {
        let text = read_input_text(args.file.as_ref())?;
        hex::decode(&text).map_err(|e| format!("error: invalid hex input: {}", e))?
    } else {
        read_input_bytes(args.file.as_ref())?
    };

    if let Some(preset) = &args.preset {
        debug!(preset = %preset, hrp = %resolved.hrp, "using preset");
    }

    // Step 2: Regroup into 5-bit values
    let values = convert_bits(&data, 8, 5, true)?;
    debug!(
        hrp = %resolved.hrp,
        variant = resolved.variant.as_str(),
        bytes = data.len(),
        values = values.len(),
        "encoding"
    );

    // Step 3: Encode and print
    let encoded = encode_with_variant(&resolved.hrp, &values, resolved.variant)?;
    println!("{}", encoded);

    Ok(())
}
