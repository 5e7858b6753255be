//! System tests driving the parser and the dump visitor together.

use infix_parser::ParseError;
use tests::parse_and_dump;

#[test]
fn parses_the_reference_expression_set() {
    let cases = [
        ("2", "Literal(2)"),
        ("v", "Variable(v)"),
        ("2+2", "Binary(Literal(2)+Literal(2))"),
        (
            "1+2+3+4",
            "Binary(Binary(Binary(Literal(1)+Literal(2))+Literal(3))+Literal(4))",
        ),
        (
            "1+(3+4)*5",
            "Binary(Literal(1)+Binary(Paren(Binary(Literal(3)+Literal(4)))*Literal(5)))",
        ),
        ("((((v))))", "Paren(Paren(Paren(Paren(Variable(v)))))"),
        (
            "(2*2/(k+v)-1)",
            "Paren(Binary(Binary(Binary(Literal(2)*Literal(2))/Paren(Binary(Variable(k)+Variable(v))))-Literal(1)))",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(
            parse_and_dump(input).unwrap(),
            expected,
            "mismatch for input {input:?}"
        );
    }
}

#[test]
fn division_and_subtraction_chain_left_to_right() {
    assert_eq!(
        parse_and_dump("9/3/3").unwrap(),
        "Binary(Binary(Literal(9)/Literal(3))/Literal(3))"
    );
    assert_eq!(
        parse_and_dump("9-3-3").unwrap(),
        "Binary(Binary(Literal(9)-Literal(3))-Literal(3))"
    );
}

#[test]
fn variables_and_literals_mix_freely() {
    assert_eq!(
        parse_and_dump("a*2+b").unwrap(),
        "Binary(Binary(Variable(a)*Literal(2))+Variable(b))"
    );
}

#[test]
fn malformed_input_fails_deterministically() {
    assert_eq!(parse_and_dump(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse_and_dump(")"), Err(ParseError::UnbalancedParen));
    assert_eq!(parse_and_dump("2++3"), Err(ParseError::MissingOperand));
}
