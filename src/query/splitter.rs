/// Split an expression at every top-level occurrence of a binary operator word.
///
/// The operator is matched case-insensitively and only where it is bounded by
/// whitespace (the start and end of the string count as boundaries) and the
/// parenthesis nesting depth is zero, so an operator word inside a group or
/// embedded in a longer word is left alone. Operands are trimmed and empty
/// operands are dropped; input order is preserved.
pub fn split_top_level<'a>(expr: &'a str, op: &str) -> Vec<&'a str> {
    let bytes = expr.as_bytes();
    let op_len = op.len();
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                depth += 1;
                i += 1;
            }
            // Tolerate unbalanced closers; the parser decides what a
            // malformed group means.
            b')' => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            _ if depth == 0 && operator_at(expr, i, op, op_len) => {
                push_operand(&mut parts, &expr[start..i]);
                i += op_len;
                start = i;
            }
            _ => i += 1,
        }
    }

    push_operand(&mut parts, &expr[start..]);
    parts
}

fn operator_at(expr: &str, i: usize, op: &str, op_len: usize) -> bool {
    let bytes = expr.as_bytes();
    let starts_at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
    let ends_at_boundary =
        i + op_len == bytes.len() || bytes.get(i + op_len).is_some_and(|b| b.is_ascii_whitespace());

    starts_at_boundary
        && ends_at_boundary
        && expr
            .get(i..i + op_len)
            .is_some_and(|word| word.eq_ignore_ascii_case(op))
}

fn push_operand<'a>(parts: &mut Vec<&'a str>, raw: &'a str) {
    let operand = raw.trim();
    if !operand.is_empty() {
        parts.push(operand);
    }
}
