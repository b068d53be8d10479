use optional::{Optional, OptionalError};

#[test]
fn absent_input_falls_through_to_the_default() {
  let text = Optional::<&str>::of_nullable(None)
    .map(str::trim)
    .or_else("default");
  assert_eq!(text, "default");
}

#[test]
fn absent_input_never_reaches_the_mapper() {
  let text = Optional::<&str>::of_nullable(None)
    .map::<&str>(|_| unreachable!())
    .or_else("default");
  assert_eq!(text, "default");
}

#[test]
fn present_input_is_transformed() {
  assert_eq!(Optional::of(" hi ").map(str::trim).get(), Ok("hi"));
}

#[test]
fn fallback_chain_returns_the_first_present_optional() {
  let found = Optional::<u32>::empty()
    .or(Optional::empty)
    .or(|| Optional::of(42));
  assert_eq!(found, Optional::of(42));
}

#[test]
fn lookup_pipeline_combines_filter_flat_map_and_fallback() {
  fn parse_port(raw: &str) -> Optional<u16> {
    Optional::of_nullable(raw.trim().parse().ok())
  }

  let port = Optional::of(" 8080 ")
    .filter(|raw| !raw.trim().is_empty())
    .flat_map(parse_port)
    .or_else(80);
  assert_eq!(port, 8080);

  let fallback = Optional::of("not a port")
    .flat_map(parse_port)
    .or_else(80);
  assert_eq!(fallback, 80);
}

#[test]
fn extraction_errors_propagate_with_the_question_mark_operator() {
  fn first_uppercase(text: &str) -> Result<char, OptionalError> {
    let first = Optional::of_nullable(text.chars().next())
      .filter(char::is_ascii_uppercase)
      .or_else_throw()?;
    Ok(first)
  }

  assert_eq!(first_uppercase("Rust"), Ok('R'));
  assert_eq!(first_uppercase("rust"), Err(OptionalError::NoValuePresent));
  assert_eq!(first_uppercase(""), Err(OptionalError::NoValuePresent));
}
