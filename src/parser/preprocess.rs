//! Preprocessing pass: absolute-value bar expansion.

use crate::core::error::EvalError;

/// Expand paired absolute-value bars into `abs(...)` calls.
///
/// Bars strictly alternate: the 1st/3rd/5th… occurrence opens (`abs(`), the
/// 2nd/4th/6th… closes (`)`). An odd bar count fails. Nesting bars inside
/// bars is not supported; write `abs(...)` explicitly for nested cases.
pub(crate) fn expand_absolute_value(input: &str) -> Result<String, EvalError> {
    let bars = input.chars().filter(|&c| c == '|').count();
    if bars == 0 {
        return Ok(input.to_owned());
    }
    if bars % 2 != 0 {
        return Err(EvalError::UnbalancedBars);
    }

    let mut output = String::with_capacity(input.len() + bars * 2);
    let mut open = false;
    for c in input.chars() {
        if c == '|' {
            output.push_str(if open { ")" } else { "abs(" });
            open = !open;
        } else {
            output.push(c);
        }
    }
    Ok(output)
}
