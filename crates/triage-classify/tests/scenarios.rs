//! Behavioural scenarios for the local classification path.

use pretty_assertions::assert_eq;
use rstest::rstest;
use triage_classify::{
    Classifier, HeuristicClassifier, MAX_CONFIDENCE, MIN_CONFIDENCE, ReplyTemplate, local_result,
};
use triage_core::Category;

#[test]
fn meeting_about_project_is_productive_with_meeting_reply() {
    let classifier = HeuristicClassifier::default();
    let content = "Precisamos agendar uma reunião sobre o projeto";

    let verdict = classifier.classify(content);
    assert_eq!(verdict.category, Category::Productive);
    assert!(verdict.matched_keywords.contains(&"reunião".to_string()));
    assert!(verdict.matched_keywords.contains(&"projeto".to_string()));
    // "agenda" matches inside "agendar": substring semantics are literal.
    assert_eq!(verdict.matched_keywords, vec!["reunião", "projeto", "agenda"]);
    assert_eq!(verdict.confidence, 0.95);

    let result = local_result(&classifier, content);
    assert_eq!(result.suggested_response, ReplyTemplate::Meeting.text());
    assert_eq!(result.highlighted_keywords, verdict.matched_keywords);
    assert_eq!(result.original_content, content);
    assert_eq!(result.classification_method.as_deref(), Some("keywords"));
}

#[test]
fn prize_offer_is_unproductive_with_decline_reply() {
    let classifier = HeuristicClassifier::default();
    let content = "Ganhe um prêmio grátis, oferta exclusiva!";

    let result = local_result(&classifier, content);
    assert_eq!(result.category, Category::Unproductive);
    for keyword in ["ganhe", "prêmio", "grátis", "oferta"] {
        assert!(
            result.highlighted_keywords.contains(&keyword.to_string()),
            "expected {keyword} in {:?}",
            result.highlighted_keywords
        );
    }
    assert_eq!(result.confidence, 0.95);
    assert_eq!(result.suggested_response, ReplyTemplate::Decline.text());
    assert!(result.reasoning.contains("IMPRODUTIVO"));
    assert!(result.reasoning.contains("oferta, grátis, ganhe, prêmio"));
}

#[rstest]
#[case("Bom dia, como vai a família?", 0.6)]
#[case("Reunião cancelada, mas temos desconto", 0.6)]
#[case("Prazo e entrega com desconto grátis", 0.8)]
fn zero_or_tied_scores_are_unproductive(#[case] content: &str, #[case] confidence: f64) {
    let verdict = HeuristicClassifier::default().classify(content);
    assert_eq!(verdict.category, Category::Unproductive);
    assert_eq!(verdict.confidence, confidence);
}

#[rstest]
#[case("")]
#[case("x")]
#[case("reunião projeto prazo entrega relatório apresentação meeting project deadline")]
#[case("spam promoção desconto oferta grátis ganhe prêmio free win prize lottery")]
#[case("Texto neutro sem nada de especial, apenas palavras comuns do dia a dia.")]
#[case("ÇÃÕ ÉÊ ÀÁ — 😀 emoji e símbolos ☃")]
fn confidence_stays_in_documented_range(#[case] content: &str) {
    let verdict = HeuristicClassifier::default().classify(content);
    assert!(verdict.confidence >= MIN_CONFIDENCE);
    assert!(verdict.confidence <= MAX_CONFIDENCE);
}

#[rstest]
#[case("Segue o relatório do trabalho", ReplyTemplate::Generic)]
#[case("Atualização do project timeline com deadline", ReplyTemplate::Project)]
#[case("Meeting notes and project report", ReplyTemplate::Meeting)]
fn productive_reply_follows_content(#[case] content: &str, #[case] template: ReplyTemplate) {
    let result = local_result(&HeuristicClassifier::default(), content);
    assert_eq!(result.category, Category::Productive);
    assert_eq!(result.suggested_response, template.text());
}

#[test]
fn classify_is_idempotent() {
    let classifier = HeuristicClassifier::default();
    let content = "Apresentação do planejamento e cronograma da estratégia";
    let first = classifier.classify(content);
    let second = classifier.classify(content);
    assert_eq!(first, second);
}
