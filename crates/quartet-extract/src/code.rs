//! Token-scan extraction for pseudo-Qiskit code.
//!
//! A tolerant lexer feeds a linear scan for gate-application call shapes
//! (`h(0)`, `qc.cx(0, 1)`, `measure_all()`) and a circuit-construction shape
//! (`QuantumCircuit(n)`). Bytes the lexer does not recognize are skipped, so
//! partial or malformed code still yields whatever calls survive.

use logos::Logos;
use quartet_ir::{Angle, Concept, ConceptParams, ConceptSet, DetectedConcept};
use std::f64::consts::PI;
use tracing::debug;

/// Tokens for the pseudo-code scanner.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
enum Token {
    #[token("pi")]
    #[token("π")]
    Pi,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("-")]
    Minus,

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

/// Scan code content for gate-application calls.
pub fn extract_code(source: &str) -> ConceptSet {
    let tokens: Vec<Token> = Token::lexer(source).filter_map(Result::ok).collect();
    let mut set = ConceptSet::new();

    for (i, token) in tokens.iter().enumerate() {
        if let Token::Identifier(name) = token {
            if let Some(args) = call_args(&tokens, i + 1) {
                scan_call(&name.to_ascii_lowercase(), &args, &mut set);
            }
        }
    }

    set
}

/// Collect the argument groups of a call whose `(` sits at `open`.
/// Returns `None` when there is no call there or the parens never balance.
fn call_args(tokens: &[Token], open: usize) -> Option<Vec<Vec<Token>>> {
    if !matches!(tokens.get(open), Some(Token::LParen)) {
        return None;
    }

    let mut depth = 1u32;
    let mut groups: Vec<Vec<Token>> = Vec::new();
    let mut current: Vec<Token> = Vec::new();

    for token in &tokens[open + 1..] {
        match token {
            Token::LParen => {
                depth += 1;
                current.push(token.clone());
            }
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    if !(groups.is_empty() && current.is_empty()) {
                        groups.push(current);
                    }
                    return Some(groups);
                }
                current.push(token.clone());
            }
            Token::Comma if depth == 1 => groups.push(std::mem::take(&mut current)),
            other => current.push(other.clone()),
        }
    }

    None
}

fn scan_call(name: &str, args: &[Vec<Token>], set: &mut ConceptSet) {
    match name {
        "quantumcircuit" => {
            if let Some(n) = args.first().and_then(|g| first_int(g)) {
                set.set_declared_qubits(n);
            }
        }
        "h" => {
            let params = ConceptParams {
                qubit: args.first().and_then(|g| first_int(g)),
                ..Default::default()
            };
            set.insert(DetectedConcept::new(Concept::Superposition, 0.95).with_params(params));
        }
        "x" | "y" | "z" | "s" | "t" | "sdg" | "tdg" => {
            // Recognized gates with no home in the pedagogical concept set.
            debug!(gate = name, "gate call has no concept mapping");
        }
        "rx" | "ry" | "rz" => {
            let params = ConceptParams {
                qubit: args.get(1).and_then(|g| first_int(g)),
                target: None,
                angle: args.first().and_then(|g| parse_angle(g)),
            };
            set.insert(DetectedConcept::new(Concept::Rotation, 0.9).with_params(params));
        }
        "cx" | "cnot" | "cz" | "swap" => {
            let confidence = if name == "swap" { 0.85 } else { 0.95 };
            let params = ConceptParams {
                qubit: args.first().and_then(|g| first_int(g)),
                target: args.get(1).and_then(|g| first_int(g)),
                angle: None,
            };
            set.insert(DetectedConcept::new(Concept::Entanglement, confidence).with_params(params));
        }
        "measure" | "measure_all" => {
            let params = ConceptParams {
                qubit: args.first().and_then(|g| first_int(g)),
                ..Default::default()
            };
            set.insert(DetectedConcept::new(Concept::Measurement, 0.95).with_params(params));
        }
        _ => {}
    }
}

fn first_int(group: &[Token]) -> Option<u32> {
    group.iter().find_map(|token| match token {
        Token::IntLiteral(n) => u32::try_from(*n).ok(),
        _ => None,
    })
}

fn pi_frac(numer: u64, denom: u64) -> Option<Angle> {
    let n = i32::try_from(numer).ok()?;
    let d = u32::try_from(denom).ok()?;
    if d == 0 {
        return None;
    }
    Some(Angle::PiRational(n, d))
}

fn negate(angle: Angle) -> Option<Angle> {
    match angle {
        Angle::Radians(v) => Some(Angle::Radians(-v)),
        Angle::PiRational(n, d) => Some(Angle::PiRational(n.checked_neg()?, d)),
    }
}

/// Parse an angle expression from one argument group.
///
/// Supported forms: literal numbers, `pi`, `n * pi`, `pi / d`, `n * pi / d`,
/// the adjacency form `2π/3`, module-qualified π (`np.pi`, `math.pi`), and a
/// leading minus. Anything else is unparseable: the caller records the
/// operation without an angle rather than aborting extraction.
fn parse_angle(group: &[Token]) -> Option<Angle> {
    // Drop module prefixes so only the π matters.
    let mut toks: Vec<&Token> = Vec::with_capacity(group.len());
    let mut i = 0;
    while i < group.len() {
        if matches!(group[i], Token::Identifier(_))
            && matches!(group.get(i + 1), Some(Token::Dot))
            && matches!(group.get(i + 2), Some(Token::Pi))
        {
            i += 2;
            continue;
        }
        toks.push(&group[i]);
        i += 1;
    }

    if let Some(Token::Minus) = toks.first() {
        let inner = parse_unsigned(&toks[1..])?;
        return negate(inner);
    }

    parse_unsigned(&toks)
}

fn parse_unsigned(toks: &[&Token]) -> Option<Angle> {
    match toks {
        [Token::IntLiteral(n)] => Some(Angle::Radians(*n as f64)),
        [Token::FloatLiteral(v)] => Some(Angle::Radians(*v)),
        [Token::Pi] => Some(Angle::pi()),
        [Token::IntLiteral(n), Token::Star, Token::Pi]
        | [Token::Pi, Token::Star, Token::IntLiteral(n)]
        | [Token::IntLiteral(n), Token::Pi] => pi_frac(*n, 1),
        [Token::Pi, Token::Slash, Token::IntLiteral(d)] => pi_frac(1, *d),
        [Token::IntLiteral(n), Token::Star, Token::Pi, Token::Slash, Token::IntLiteral(d)]
        | [Token::IntLiteral(n), Token::Pi, Token::Slash, Token::IntLiteral(d)] => pi_frac(*n, *d),
        [Token::FloatLiteral(v), Token::Star, Token::Pi]
        | [Token::Pi, Token::Star, Token::FloatLiteral(v)] => Some(Angle::Radians(v * PI)),
        [Token::Pi, Token::Slash, Token::FloatLiteral(v)] if *v != 0.0 => {
            Some(Angle::Radians(PI / v))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELL_SNIPPET: &str = "\
from qiskit import QuantumCircuit

qc = QuantumCircuit(3)
qc.h(0)
qc.cx(0, 1)
qc.measure_all()
";

    #[test]
    fn test_bell_snippet() {
        let set = extract_code(BELL_SNIPPET);
        assert!(set.contains(Concept::Superposition));
        assert!(set.contains(Concept::Entanglement));
        assert!(set.contains(Concept::Measurement));
        assert_eq!(set.declared_qubits(), Some(3));

        let ent = set.get(Concept::Entanglement).unwrap();
        assert_eq!(ent.params.qubit, Some(0));
        assert_eq!(ent.params.target, Some(1));
    }

    #[test]
    fn test_default_qubit_count() {
        let set = extract_code("qc.h(0)");
        assert_eq!(set.declared_qubits(), None);
        assert_eq!(set.qubits_or_default(), 2);
    }

    #[test]
    fn test_angle_forms() {
        let cases: &[(&str, Angle)] = &[
            ("qc.ry(pi / 2, 0)", Angle::PiRational(1, 2)),
            ("qc.rx(2 * pi / 3, 1)", Angle::PiRational(2, 3)),
            ("qc.rz(np.pi, 0)", Angle::PiRational(1, 1)),
            ("qc.rz(math.pi / 4, 0)", Angle::PiRational(1, 4)),
            ("qc.ry(π/2, 0)", Angle::PiRational(1, 2)),
            ("qc.ry(2π/3, 0)", Angle::PiRational(2, 3)),
            ("qc.rx(0.5, 0)", Angle::Radians(0.5)),
            ("qc.ry(-pi / 2, 0)", Angle::PiRational(-1, 2)),
        ];
        for (source, expected) in cases {
            let set = extract_code(source);
            let rotation = set.get(Concept::Rotation).unwrap_or_else(|| {
                panic!("no rotation extracted from {source:?}");
            });
            assert_eq!(rotation.params.angle, Some(*expected), "source: {source:?}");
        }
    }

    #[test]
    fn test_unparseable_angle_keeps_operation() {
        let set = extract_code("qc.ry(theta, 0)");
        let rotation = set.get(Concept::Rotation).unwrap();
        assert_eq!(rotation.params.angle, None);
        assert_eq!(rotation.params.qubit, Some(0));
    }

    #[test]
    fn test_cnot_alias() {
        let set = extract_code("cnot(0, 1)");
        assert!(set.contains(Concept::Entanglement));
    }

    #[test]
    fn test_pauli_gates_have_no_concept() {
        let set = extract_code("qc.x(0)\nqc.z(1)");
        assert!(set.is_empty());
    }

    #[test]
    fn test_malformed_code_is_tolerated() {
        assert!(extract_code("qc.h(").is_empty());
        assert!(extract_code("::: not code @@@").is_empty());
        let set = extract_code("qc.h(0) garbage ~~~ qc.measure_all()");
        assert!(set.contains(Concept::Superposition));
        assert!(set.contains(Concept::Measurement));
    }
}
