// Unit tests for the content-rule cascade.
//
// Tests each rank in isolation, first-match priority between ranks, case
// and accent handling, and totality over odd inputs.

use kefir_topics::classifier::normalize::normalize;
use kefir_topics::classifier::{Topic, TopicClassifier};

fn classify(text: &str) -> Topic {
    TopicClassifier::new().unwrap().classify(text)
}

// ============================================================
// One representative comment per content rank
// ============================================================

#[test]
fn rank1_homemade_kefir() {
    assert_eq!(classify("Mejor hacerlo en casa"), Topic::HomemadeKefir);
}

#[test]
fn rank2_price() {
    assert_eq!(classify("Absurdamente caro para lo que es"), Topic::Price);
}

#[test]
fn rank3_ingredients() {
    assert_eq!(classify("Tiene muchos conservantes"), Topic::Ingredients);
}

#[test]
fn rank4_health_benefits() {
    assert_eq!(classify("Me ayudó con la gastritis"), Topic::HealthBenefits);
}

#[test]
fn rank5_taste() {
    assert_eq!(classify("Sabe feo, no lo vuelvo a tomar"), Topic::Taste);
}

#[test]
fn rank6_competitors() {
    assert_eq!(classify("Prefiero Colanta"), Topic::Competitors);
}

#[test]
fn rank7_availability() {
    assert_eq!(classify("No lo encuentro en Yopal"), Topic::Availability);
}

#[test]
fn rank8_recipes() {
    assert_eq!(classify("Yo lo mezclo con granola"), Topic::Recipes);
}

#[test]
fn rank9_advertising() {
    assert_eq!(
        classify("La publicidad con Caitlyn Jenner"),
        Topic::Advertising
    );
}

#[test]
fn rules_table_exposes_ranks_one_to_nine() {
    let classifier = TopicClassifier::new().unwrap();
    let topics: Vec<Topic> = classifier.rules().iter().map(|r| r.topic()).collect();
    assert_eq!(topics, Topic::ALL[..9].to_vec());
}

#[test]
fn individual_rule_can_be_tested_alone() {
    let classifier = TopicClassifier::new().unwrap();
    let taste = &classifier.rules()[4];
    assert_eq!(taste.topic(), Topic::Taste);
    assert!(taste.matches(&normalize("¡Delicioso!")));
    assert!(!taste.matches(&normalize("Hoy llueve")));
}

// ============================================================
// Priority: first matching rank wins
// ============================================================

#[test]
fn homemade_outranks_price_and_health() {
    assert_eq!(
        classify("Yo hago mi kéfir en casa con bacterias, el suyo es muy caro"),
        Topic::HomemadeKefir
    );
}

#[test]
fn price_outranks_taste() {
    assert_eq!(
        classify("Me encantó el sabor pero es muy caro"),
        Topic::Price
    );
    assert_eq!(classify("Rico pero caro"), Topic::Price);
}

#[test]
fn alternatives_are_substrings() {
    // "ara" inside "para" is enough for the competitor rule
    assert_eq!(classify("Lo compré para mi mamá"), Topic::Competitors);
}

// ============================================================
// Normalization: case and accents
// ============================================================

#[test]
fn case_insensitive_price() {
    assert_eq!(classify("CARO"), Topic::Price);
    assert_eq!(classify("Caro"), Topic::Price);
    assert_eq!(classify("caro"), Topic::Price);
}

#[test]
fn case_insensitive_with_accents() {
    assert_eq!(classify("NO ME GUSTA"), Topic::Taste);
    assert_eq!(classify("MEJORA LA DIGESTIÓN"), Topic::HealthBenefits);
}

#[test]
fn accented_and_plain_spellings_classify_identically() {
    let pairs = [
        ("Mejora la digestión", "Mejora la digestion"),
        ("Se lo doy a mi hijo con chía", "Se lo doy a mi hijo con chia"),
        ("Es muy económico", "Es muy economico"),
        ("No sé dónde venden", "No se donde venden"),
        ("Tengo búlgaros", "Tengo bulgaros"),
        ("Sin azúcar añadida", "Sin azucar añadida"),
    ];
    for (accented, plain) in pairs {
        assert_eq!(
            classify(accented),
            classify(plain),
            "{accented:?} vs {plain:?}"
        );
    }
    assert_eq!(classify("Se lo doy a mi hijo con chía"), Topic::Recipes);
    assert_eq!(classify("No sé dónde venden"), Topic::Availability);
}

#[test]
fn accented_non_keywords_do_not_match_plain_alternatives() {
    // "-ará" is not "ara", "mí" is not "mi"
    assert_eq!(classify("Lo tomará mi hijo mañana temprano"), Topic::Other);
    assert_eq!(classify("Ya llegará el pedido algún día"), Topic::Other);
    assert_eq!(classify("Lo hice yo mismo hecho por mí"), Topic::Other);
    assert_eq!(
        classify("Lo hice yo mismo hecho por mi"),
        Topic::HomemadeKefir
    );
}

#[test]
fn caro_boundary_counts_non_ascii_letters() {
    assert_eq!(classify("Está caroñas verdad"), Topic::Other);
    assert_eq!(classify("¡Caro!"), Topic::Price);
}

// ============================================================
// Totality and determinism
// ============================================================

#[test]
fn every_input_gets_a_known_topic() {
    let classifier = TopicClassifier::new().unwrap();
    let long = "palabra ".repeat(5_000);
    let inputs = [
        "",
        " ",
        "\n\n\t",
        "🙂",
        "[sticker]",
        "1234567890",
        "İSTANBUL",
        "\u{200B}",
        long.as_str(),
    ];
    for input in inputs {
        let topic = classifier.classify(input);
        assert!(Topic::ALL.contains(&topic), "{input:?} -> {topic:?}");
        assert!(!topic.label().is_empty());
    }
}

#[test]
fn non_text_values_are_coerced() {
    let classifier = TopicClassifier::new().unwrap();
    assert_eq!(classifier.classify(0), Topic::OffTopic);
    assert_eq!(classifier.classify(true), Topic::OffTopic);
    assert_eq!(classifier.classify('x'), Topic::OffTopic);
}

#[test]
fn repeated_calls_agree() {
    let classifier = TopicClassifier::new().unwrap();
    let text = "¿Dónde puedo comprar este producto?";
    let first = classifier.classify(text);
    for _ in 0..100 {
        assert_eq!(classifier.classify(text), first);
    }
}
