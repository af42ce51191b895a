use crate::error::ContrastError;
use crate::types::Rgb;

/// Naive integer parse of a single channel component: skip surrounding
/// whitespace, accept an optional sign, consume ASCII digits, ignore
/// everything after them. `"12.9"` parses as `12`; a component with no
/// leading digits is not numeric. This truncating behavior matches the
/// harness that produces the strings and must not be swapped for rounding.
fn parse_component(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Parse a computed-style color of the form `rgb(r, g, b)` or
/// `rgba(r, g, b, a)` into an opaque channel triple.
///
/// A fully transparent `rgba` (alpha component parsing to 0) resolves to
/// white, since it exposes the default page background; any other alpha
/// value is dropped without blending. Channels are clamped into 0-255.
///
/// Fails when the string has no `(..)` pair or fewer than three numeric
/// components inside it.
pub fn parse_color(raw: &str) -> Result<Rgb, ContrastError> {
    let malformed = || ContrastError::MalformedColor {
        raw: raw.to_string(),
    };

    let open = raw.find('(').ok_or_else(malformed)?;
    let close = raw[open + 1..]
        .find(')')
        .map(|i| open + 1 + i)
        .ok_or_else(malformed)?;

    let components: Vec<i64> = raw[open + 1..close]
        .split(',')
        .filter_map(parse_component)
        .collect();
    if components.len() < 3 {
        return Err(malformed());
    }

    if components.len() >= 4 && components[3] == 0 {
        return Ok(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
    }

    Ok(Rgb {
        r: clamp_channel(components[0]),
        g: clamp_channel(components[1]),
        b: clamp_channel(components[2]),
    })
}
