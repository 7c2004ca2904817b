use std::collections::BTreeSet;

use seqsig_core::RngHandle;
use seqsig_gen::Corpus;
use seqsig_prob::SignificanceEngine;

#[test]
fn mixed_corpus_covers_pattern_lengths_two_through_six() {
    let mut engine = SignificanceEngine::new();
    let corpus = Corpus::assemble_mixed(&mut engine, 11).unwrap();

    let lengths: Vec<usize> = corpus.patterns.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![2, 3, 4, 5, 6]);

    // Pattern alphabets are pairwise disjoint thanks to the length digit.
    let mut seen = BTreeSet::new();
    for pattern in &corpus.patterns {
        for token in pattern {
            assert!(seen.insert(token.clone()), "token {token} reused");
        }
    }

    let expected_support = 1.5 / corpus.sequences.len() as f64;
    assert_eq!(corpus.support, expected_support);
    assert!(corpus.support > 0.0);
}

#[test]
fn assembly_is_deterministic_per_master_seed() {
    let corpus_a = Corpus::assemble_mixed(&mut SignificanceEngine::new(), 37).unwrap();
    let corpus_b = Corpus::assemble_mixed(&mut SignificanceEngine::new(), 37).unwrap();
    assert_eq!(corpus_a, corpus_b);

    let corpus_c = Corpus::assemble_mixed(&mut SignificanceEngine::new(), 38).unwrap();
    assert_ne!(corpus_a.sequences, corpus_c.sequences);
}

#[test]
fn burst_corpus_pairs_bursty_and_normal_variants() {
    let mut engine = SignificanceEngine::new();
    let corpus = Corpus::assemble_bursts(0.6, 0.2, &mut engine, 13).unwrap();

    assert_eq!(corpus.patterns.len(), 8);
    for (idx, pattern) in corpus.patterns.iter().enumerate() {
        let expected_len = 3 + idx / 2;
        assert_eq!(pattern.len(), expected_len);
        let marker = if idx % 2 == 0 { "B" } else { "N" };
        let prefix = format!("{expected_len}{marker}");
        assert!(pattern.iter().all(|token| token.starts_with(&prefix)));
    }
}

#[test]
fn random_burst_corpus_keeps_decoys_out_of_ground_truth() {
    let mut engine = SignificanceEngine::new();
    let corpus = Corpus::assemble_random_bursts(3, &mut engine, 17).unwrap();

    // Ground truth: the four normal datasets only.
    let lengths: Vec<usize> = corpus.patterns.iter().map(Vec::len).collect();
    assert_eq!(lengths, vec![3, 4, 5, 6]);

    // Decoy blocks land at the tail: 3 blocks of 10 sequences of 20 tokens.
    let decoys = &corpus.sequences[corpus.sequences.len() - 30..];
    for (offset, sequence) in decoys.iter().enumerate() {
        let block = offset / 10;
        let prefix = format!("4B|{block}|");
        assert_eq!(sequence.len(), 20);
        assert!(sequence.iter().all(|token| token.starts_with(&prefix)));
    }
}

#[test]
fn datasets_draw_from_independent_substreams() {
    // Appending decoy blocks must not disturb the implanted datasets:
    // every dataset consumes its own substream of the master seed.
    let without_decoys =
        Corpus::assemble_random_bursts(0, &mut SignificanceEngine::new(), 31).unwrap();
    let with_decoys =
        Corpus::assemble_random_bursts(2, &mut SignificanceEngine::new(), 31).unwrap();

    assert_eq!(without_decoys.patterns, with_decoys.patterns);
    let shared = without_decoys.sequences.len();
    assert_eq!(
        without_decoys.sequences[..],
        with_decoys.sequences[..shared]
    );
    assert_eq!(with_decoys.sequences.len(), shared + 20);
}

#[test]
fn shuffling_preserves_per_sequence_token_counts() {
    let mut engine = SignificanceEngine::new();
    let mut corpus = Corpus::assemble_random_bursts(1, &mut engine, 19).unwrap();
    let before: Vec<Vec<String>> = corpus
        .sequences
        .iter()
        .map(|sequence| {
            let mut sorted = sequence.clone();
            sorted.sort();
            sorted
        })
        .collect();

    let mut rng = RngHandle::from_seed(23);
    corpus.shuffle_within_sequences(&mut rng);

    let after: Vec<Vec<String>> = corpus
        .sequences
        .iter()
        .map(|sequence| {
            let mut sorted = sequence.clone();
            sorted.sort();
            sorted
        })
        .collect();
    assert_eq!(before, after);
}
