//! Assertion helpers shared by the parser unit tests.

/// Run a nom-style parser (`I -> Result<(I, T), E>`) and compare its output,
/// ignoring whatever input is left over.
pub fn generic_command_parse<F, I, T, E>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> Result<(I, T), E>,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug,
{
    let result = parser(input.clone());
    assert!(
        result.is_ok(),
        "The input:\r\n({:?})\r\nfailed with:\r\n{:#?}",
        input,
        result
    );
    let (_rest, res) = result.unwrap();
    assert_eq!(
        expect, res,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, res
    );
}

/// Run a plain function and compare its output.
pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let result = parser(input);
    assert_eq!(
        expect, result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, result
    );
}
