use interviewer_core::scoring::Score;

/// Parse a `criterion=score` pair
pub fn parse_score_pair(s: &str) -> std::result::Result<(String, Score), String> {
    let (criterion, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected criterion=score, got {s:?}"))?;
    let criterion = criterion.trim();
    if criterion.is_empty() {
        return Err(format!("missing criterion in {s:?}"));
    }
    let score = value.parse::<Score>().map_err(|e| e.to_string())?;
    Ok((criterion.to_string(), score))
}
