use super::*;

#[test]
fn constructor_helpers_format_their_category() {
    assert_eq!(
        DriftlabError::validation("bad plan").to_string(),
        "validation error: bad plan"
    );
    assert_eq!(
        DriftlabError::render("oops").to_string(),
        "render error: oops"
    );
    assert_eq!(
        DriftlabError::encode("no ffmpeg").to_string(),
        "encode error: no ffmpeg"
    );
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let err: DriftlabError = anyhow::anyhow!("lower level").into();
    assert_eq!(err.to_string(), "lower level");
}
