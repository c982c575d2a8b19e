//! TF-IDF and substring keyword-match scoring

use crate::postings::Postings;
use tablescout_core::DocumentFrequency;

/// Sum of tf * idf over the query keywords.
///
/// `record_keywords` is the tokenized composite text of one record.
/// tf = occurrences / record keyword count, idf = ln(total_records / df).
/// Keywords with df = 0 add nothing.
pub fn tfidf_score(
    query_keywords: &[String],
    record_keywords: &[String],
    postings: &Postings,
    total_records: usize,
    mode: DocumentFrequency,
) -> f64 {
    if record_keywords.is_empty() {
        return 0.0;
    }

    let doc_len = record_keywords.len() as f64;
    let mut score = 0.0;

    for keyword in query_keywords {
        let count = record_keywords.iter().filter(|k| *k == keyword).count();
        let tf = count as f64 / doc_len;
        let df = postings.document_frequency(keyword, mode);
        if df > 0 {
            let idf = (total_records as f64 / df as f64).ln();
            score += tf * idf;
        }
    }

    score
}

/// Fraction of query keywords found as a literal substring of `lowered_text`
pub fn keyword_match_score(query_keywords: &[String], lowered_text: &str) -> f64 {
    if query_keywords.is_empty() {
        return 0.0;
    }

    let matches = query_keywords
        .iter()
        .filter(|k| lowered_text.contains(k.as_str()))
        .count();
    matches as f64 / query_keywords.len() as f64
}
