/// Soundex distance: 0 if the two codes match, 1 otherwise. Soundex is a
/// coarse phonetic bucket, not a graded metric.
pub fn distance(a: &[u32], b: &[u32]) -> f64 {
    if encode(a) == encode(b) {
        0.0
    } else {
        1.0
    }
}

/// Encodes one name into a 4-character Soundex code. Units outside ASCII
/// letters are dropped from the letter stream entirely rather than coded,
/// after a diagnostic warning for non-ASCII units and non-printable ASCII
/// control units (tab, other control characters) alike — Soundex has no
/// defined behaviour for either.
fn encode(units: &[u32]) -> [u8; 4] {
    let letters: Vec<u8> = units
        .iter()
        .filter_map(|&u| {
            if u >= 128 {
                tracing::warn!(unit = u, "soundex: dropping non-ASCII unit from input");
                return None;
            }

            let byte = u as u8;
            if byte < 0x20 || byte == 0x7f {
                tracing::warn!(unit = u, "soundex: dropping non-printable ASCII unit from input");
                return None;
            }

            if byte.is_ascii_alphabetic() {
                Some(byte.to_ascii_uppercase())
            } else {
                None
            }
        })
        .collect();

    // No letters at all (empty input, or input made only of digits/
    // punctuation) encodes to "0000".
    if letters.is_empty() {
        return *b"0000";
    }

    let mut code = [b'0'; 4];
    code[0] = letters[0];

    let mut out_idx = 1usize;
    let mut last_digit = code_digit(letters[0]);

    for &ch in &letters[1..] {
        if out_idx >= 4 {
            break;
        }
        let digit = code_digit(ch);
        if digit == 0 {
            // Vowels (and Y) reset the adjacency run but are not coded.
            // H/W are transparent: they neither reset nor interrupt a run.
            if ch != b'H' && ch != b'W' {
                last_digit = 0;
            }
            continue;
        }
        if digit != last_digit {
            code[out_idx] = b'0' + digit;
            out_idx += 1;
        }
        last_digit = digit;
    }

    code
}

fn code_digit(ch: u8) -> u8 {
    match ch {
        b'B' | b'F' | b'P' | b'V' => 1,
        b'C' | b'G' | b'J' | b'K' | b'Q' | b'S' | b'X' | b'Z' => 2,
        b'D' | b'T' => 3,
        b'L' => 4,
        b'M' | b'N' => 5,
        b'R' => 6,
        _ => 0,
    }
}
