use crate::cli::{
    args::DecodeArgs,
    commands::{format_values, read_input_text},
};
use bech32_text::{Decoded, Variant, convert_bits, decode_generic, decode_no_limit, decode_with_variant};
use std::io::{self, Write};
use tracing::{debug, warn};

pub fn handle(args: DecodeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = match &args.input {
        Some(s) => s.trim().to_string(),
        None => read_input_text(args.file.as_ref())?,
    };

    // Step 1: Decode and verify the checksum
    let decoded = if args.no_limit {
        let (hrp, data) = decode_no_limit(&input)?;
        Decoded {
            hrp,
            data,
            variant: Variant::Bech32,
        }
    } else if let Some(variant) = args.variant {
        let variant: Variant = variant.into();
        let (hrp, data) = decode_with_variant(&input, variant)?;
        Decoded { hrp, data, variant }
    } else {
        decode_generic(&input)?
    };
    debug!(
        hrp = %decoded.hrp,
        variant = decoded.variant.as_str(),
        values = decoded.data.len(),
        "decoded"
    );

    // Step 2: Output
    if args.values {
        println!("{}", format_values(&decoded.data));
        return Ok(());
    }

    if args.json {
        let bytes = convert_bits(&decoded.data, 5, 8, false).ok();
        let output = serde_json::json!({
            "hrp": decoded.hrp,
            "variant": decoded.variant,
            "values": decoded.data,
            "bytes": bytes.map(hex::encode),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let bytes = convert_bits(&decoded.data, 5, 8, false).inspect_err(|_| {
        warn!("data does not regroup to whole bytes, try --values");
    })?;

    if args.hex {
        println!("{}", hex::encode(&bytes));
    } else {
        io::stdout().write_all(&bytes)?;
    }

    Ok(())
}
