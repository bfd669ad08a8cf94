use super::evaluation_error::EvaluationError;

pub const CODE_LENGTH: usize = 4;

/// Soundex variant: the first letter is kept, following letters map to digit
/// classes, and a digit is appended only when it is nonzero and differs from
/// the code of the letter immediately before it.
///
/// Unlike classic Soundex, vowels and H/W/Y reset the previous code, so a
/// repeated class separated by any of them is encoded twice.
pub struct PhoneticEncoder;

impl PhoneticEncoder {
    pub fn encode(word: &str) -> Result<String, EvaluationError> {
        let letters: Vec<char> = word.to_uppercase().chars().collect();
        let first = *letters
            .first()
            .ok_or_else(|| EvaluationError::invalid("cannot encode an empty word"))?;

        let mut code = String::with_capacity(CODE_LENGTH);
        code.push(first);
        let mut digits = 1;
        let mut prev_code = digit_class(first);

        for &letter in &letters[1..] {
            let class = digit_class(letter);
            if class != prev_code && class != 0 {
                code.push(char::from(b'0' + class));
                digits += 1;
            }
            if digits == CODE_LENGTH {
                break;
            }
            prev_code = class;
        }

        while digits < CODE_LENGTH {
            code.push('0');
            digits += 1;
        }
        Ok(code.chars().take(CODE_LENGTH).collect())
    }
}

fn digit_class(letter: char) -> u8 {
    match letter {
        'B' | 'F' | 'P' | 'V' => 1,
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => 2,
        'D' | 'T' => 3,
        'L' => 4,
        'M' | 'N' => 5,
        'R' => 6,
        _ => 0,
    }
}
