//! End-to-end solver scenarios

use wordle_advisor::core::{Feedback, Observation, Pattern, Resolution, Word};
use wordle_advisor::solver::{
    Heuristic, Mode, Phase, RayonPool, Ranker, Sequential, Solver, SolverConfig,
};
use wordle_advisor::wordlists::WordLists;
use wordle_advisor::wordlists::loader::words_from_slice;

const VOCABULARY: [&str; 20] = [
    "crane", "slate", "pious", "dough", "mirth", "lymph", "fjord", "bulky", "gawky", "nymph",
    "whisk", "vexed", "zonal", "quart", "plumb", "stink", "glove", "chord", "brisk", "tempo",
];

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn embedded_solver(config: SolverConfig) -> Solver<Sequential> {
    let lists = WordLists::embedded();
    Solver::with_executor(config, &lists.answers, &lists.allowed, Sequential).unwrap()
}

#[test]
fn closed_vocabulary_always_solved_within_six() {
    let words = words_from_slice(&VOCABULARY);

    for heuristic in [Heuristic::Entropy, Heuristic::ExpectedSize] {
        let config = SolverConfig::default()
            .with_heuristic(heuristic)
            .without_opener();
        let solver = Solver::with_executor(config, &words, &words, Sequential).unwrap();

        for target in &words {
            let record = solver.simulate(target).unwrap();
            assert!(record.solved, "{heuristic}: {target} not solved");
            assert_eq!(record.phase, Phase::Solved);
            assert!(
                record.num_guesses <= 6,
                "{heuristic}: {target} took {} guesses ({})",
                record.num_guesses,
                record.history()
            );
        }
    }
}

#[test]
fn hard_mode_guesses_respect_all_feedback() {
    let solver = embedded_solver(SolverConfig::default().with_mode(Mode::Hard));

    for target in ["glove", "dough", "mirth", "crane", "sassy"].map(word) {
        let mut game = solver.new_game();
        let mut played: Vec<(Word, Pattern)> = Vec::new();

        while !game.phase().is_terminal() && game.turns() < 32 {
            let suggestion = game.suggest().unwrap();
            for scored in &suggestion.guesses {
                for (guess, pattern) in &played {
                    assert_eq!(
                        Pattern::calculate(guess, &scored.word),
                        *pattern,
                        "{} ignores feedback for {guess}",
                        scored.word
                    );
                }
            }

            let guess = suggestion.best().unwrap().word.clone();
            let pattern = Pattern::calculate(&guess, &target);
            game.observe(&guess, Observation::Pattern(pattern)).unwrap();
            played.push((guess, pattern));
        }

        assert_eq!(game.phase(), Phase::Solved, "hard mode failed on {target}");
    }
}

#[test]
fn easy_mode_may_probe_outside_candidates() {
    // The guess pool is never pruned in easy mode
    let solver = embedded_solver(SolverConfig::default());
    let mut game = solver.new_game();
    let before = game.state().guess_pool().len();

    let tares = word("tares");
    let pattern = Pattern::calculate(&tares, &word("glove"));
    game.observe(&tares, Observation::Pattern(pattern)).unwrap();

    assert_eq!(game.state().guess_pool().len(), before);
    assert!(game.candidates().len() < solver.answers().len());
}

#[test]
fn six_letter_word_is_rejected_for_five_letter_lists() {
    let words = words_from_slice(&["would", "could", "should"]);
    assert_eq!(words, vec![word("would"), word("could")]);

    let pattern = Pattern::calculate(&word("would"), &word("could"));
    assert_eq!(
        pattern.tags(),
        vec![
            Feedback::Absent,
            Feedback::Hit,
            Feedback::Hit,
            Feedback::Hit,
            Feedback::Hit
        ]
    );

    let solver = Solver::with_executor(
        SolverConfig::default().without_opener(),
        &words,
        &words,
        Sequential,
    )
    .unwrap();
    for target in &words {
        let record = solver.simulate(target).unwrap();
        assert!(record.solved);
        assert!(record.num_guesses <= 2);
    }
}

#[test]
fn repeated_letters_are_consumed_once() {
    let pattern = Pattern::calculate(&word("assay"), &word("sassy"));
    assert_eq!(
        pattern.tags(),
        vec![
            Feedback::Present,
            Feedback::Present,
            Feedback::Hit,
            Feedback::Absent,
            Feedback::Hit
        ]
    );
    assert_eq!(pattern.counts(), (2, 2));
}

#[test]
fn ranking_is_deterministic() {
    let lists = WordLists::embedded();
    let candidates = &lists.answers[..120];

    for heuristic in [Heuristic::Entropy, Heuristic::ExpectedSize] {
        let parallel = Ranker::new(heuristic, RayonPool::global());
        let sequential = Ranker::new(heuristic, Sequential);

        let first = parallel.rank(&lists.allowed, candidates, 10);
        assert_eq!(first.len(), 10);
        for _ in 0..3 {
            assert_eq!(parallel.rank(&lists.allowed, candidates, 10), first);
        }
        assert_eq!(sequential.rank(&lists.allowed, candidates, 10), first);
    }
}

#[test]
fn dedicated_thread_pool_matches_global() {
    let lists = WordLists::embedded();
    let config = SolverConfig {
        threads: Some(2),
        ..SolverConfig::default()
    };
    let pooled = Solver::new(config, &lists.answers, &lists.allowed).unwrap();
    let global = Solver::new(SolverConfig::default(), &lists.answers, &lists.allowed).unwrap();

    let target = word("chord");
    assert_eq!(
        pooled.simulate(&target).unwrap(),
        global.simulate(&target).unwrap()
    );
}

#[test]
fn contradictory_feedback_exhausts() {
    let solver = embedded_solver(SolverConfig::default());
    let mut game = solver.new_game();

    let crane = word("crane");
    let phase = game
        .observe(&crane, Observation::Pattern(Pattern::calculate(&crane, &word("slate"))))
        .unwrap();
    assert_eq!(phase, Phase::Guessing);

    // Same guess, different feedback: nothing can satisfy both
    let phase = game
        .observe(&crane, Observation::Pattern(Pattern::calculate(&crane, &word("chord"))))
        .unwrap();
    assert_eq!(phase, Phase::Exhausted);
    assert!(game.suggest().is_err());

    game.undo().unwrap();
    assert_eq!(game.phase(), Phase::Guessing);
    assert!(game.suggest().is_ok());
}

#[test]
fn legacy_counts_with_unique_letters() {
    let config = SolverConfig {
        unique_letters: true,
        ..SolverConfig::default()
    };
    let solver = embedded_solver(config);
    assert!(solver.answers().iter().all(Word::has_unique_letters));
    assert!(solver.allowed().iter().all(Word::has_unique_letters));

    // Scores measure the counts the player sees, not the hidden pattern
    let game = solver.new_game();
    let opener = game.suggest().unwrap();
    let tares = word("tares");
    assert_eq!(opener.best().unwrap().word, tares);
    let counts_bits =
        Heuristic::Entropy.score_with(&tares, solver.answers(), Resolution::Counts);
    let pattern_bits = Heuristic::Entropy.score(&tares, solver.answers());
    assert!((opener.best().unwrap().score - counts_bits).abs() < 1e-12);
    assert!(counts_bits < pattern_bits);

    let ranked = solver.ranker().rank(solver.allowed(), solver.answers(), 1);
    let best = &ranked[0];
    let expected = Heuristic::Entropy.score_with(&best.word, solver.answers(), Resolution::Counts);
    assert!((best.score - expected).abs() < 1e-12);

    for target in ["glove", "chord", "drink", "earth"].map(word) {
        let mut game = solver.new_game();
        while !game.phase().is_terminal() && game.turns() < 32 {
            let guess = game.suggest().unwrap().best().unwrap().word.clone();
            let (hits, misplaced) = Pattern::calculate(&guess, &target).counts();
            let observation = Observation::counts(hits, misplaced, 5).unwrap();
            game.observe(&guess, observation).unwrap();
            assert!(game.candidates().contains(&target));
        }
        assert_eq!(game.phase(), Phase::Solved, "counts game failed on {target}");
        assert!(solver.simulate(&target).unwrap().solved);
    }
}
