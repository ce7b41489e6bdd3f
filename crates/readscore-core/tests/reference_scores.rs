//! Exact counts and scores for a corpus of prose, markup and whitespace
//! edge cases.
//!
//! Every expected value was produced by the reference scorer these formulas
//! come from, so any drift in rounding, operation order or tokenizing shows
//! up here as an exact mismatch.

use readscore_core::{ContentCounts, ReadabilityScores, count_content, score_readability};

struct Case {
    text: &'static str,
    /// sentences, words, big, small, tiny, linsear ignores, syllables, letters, characters
    counts: [usize; 9],
    /// FKG, FRE, fog, ARI, Linsear, FORCAST, Coleman-Liau, SMOG, Fry, average
    scores: [f64; 10],
}

const CASES: &[Case] = &[
    Case {
        text: "The cat sat on the mat.",
        counts: [1, 6, 0, 6, 6, 1, 6, 17, 17],
        scores: [-1.45, 116.0, 2.4, -5.09, 1.5, 5.0, -4.07, 1.84, 5.0, 1.0],
    },
    Case {
        text: "<p>The cat sat.</p>",
        counts: [1, 3, 0, 3, 3, 0, 3, 9, 9],
        scores: [-2.62, 119.0, 1.2, -5.8, 0.5, 5.0, -8.03, 1.84, 5.0, 0.0],
    },
    Case {
        text: "no punctuation here at all",
        counts: [1, 5, 1, 4, 4, 0, 7, 22, 22],
        scores: [2.88, 83.0, 10.0, 1.79, 2.5, 8.0, 4.15, 6.0, 8.0, 5.0],
    },
    Case {
        text: "Unclosed <b tag",
        counts: [1, 1, 0, 1, 0, 0, 2, 8, 8],
        scores: [8.4, 37.0, 0.4, 16.75, -0.5, 20.0, 1.64, 1.84, 20.0, 9.0],
    },
    Case {
        text: "Something happened yesterday.\n\tSomeone noticed &quot;it&quot; and said it&#39;s fine.",
        counts: [2, 10, 1, 9, 4, 0, 17, 56, 56],
        scores: [6.42, 58.0, 6.0, 7.45, 2.0, 14.0, 11.21, 4.44, 14.0, 8.0],
    },
    Case {
        text: "The implementation of the comprehensive organizational restructuring initiative necessitated the establishment of interdepartmental communication protocols. It was hard! Was it worth it?",
        counts: [3, 22, 10, 12, 12, 3, 57, 162, 162],
        scores: [17.84, -20.0, 21.1, 16.92, 5.5, 11.82, 23.46, 10.59, 11.82, 15.0],
    },
    Case {
        text: "Hi.",
        counts: [1, 1, 0, 1, 1, 0, 1, 2, 2],
        scores: [-3.4, 121.0, 0.4, -11.51, -0.5, 5.0, -33.64, 1.84, 5.0, -5.0],
    },
    Case {
        text: "Go!",
        counts: [1, 1, 0, 1, 1, 0, 1, 2, 2],
        scores: [-3.4, 121.0, 0.4, -11.51, -0.5, 5.0, -33.64, 1.84, 5.0, -5.0],
    },
    Case {
        text: "Yes. No. Maybe.",
        counts: [3, 3, 0, 3, 2, 0, 4, 10, 10],
        scores: [0.53, 93.0, 0.4, -5.23, -0.5, 10.0, -25.8, 1.84, 10.0, -1.0],
    },
    Case {
        text: "Readability formulas estimate the grade level required to understand a passage.",
        counts: [1, 11, 5, 6, 4, 1, 25, 68, 68],
        scores: [15.52, 3.0, 22.6, 13.19, 9.0, 14.55, 17.86, 12.91, 14.55, 15.0],
    },
    Case {
        text: "We were there, and they were not. The dog is here; the birds are gone.",
        counts: [2, 15, 0, 15, 12, 5, 18, 52, 52],
        scores: [1.5, 98.0, 3.0, -1.35, 1.5, 8.0, 0.64, 1.84, 8.0, 3.0],
    },
    Case {
        text: "Extraordinary circumstances necessitate unconventional approaches!",
        counts: [1, 5, 5, 0, 0, 0, 21, 61, 61],
        scores: [35.92, -154.0, 42.0, 38.53, 6.5, 20.0, 50.02, 12.91, 20.0, 28.0],
    },
    Case {
        text: "She sells seashells by the seashore. The shells she sells are surely seashells.",
        counts: [2, 13, 2, 11, 9, 2, 19, 65, 65],
        scores: [4.19, 77.0, 8.8, 5.37, 2.75, 9.62, 9.05, 6.0, 9.62, 7.0],
    },
    Case {
        text: "<div class=\"intro\">\n  <h1>Welcome</h1>\n  <p>This is a <em>short</em> page.</p>\n</div>",
        counts: [1, 6, 0, 6, 4, 1, 8, 23, 23],
        scores: [2.48, 88.0, 2.4, -0.38, 1.5, 10.0, 1.81, 1.84, 10.0, 4.0],
    },
    Case {
        text: "Route 66 runs west. It was built in 1926!",
        counts: [2, 9, 0, 9, 9, 1, 9, 25, 31],
        scores: [-2.03, 118.0, 1.8, -2.96, 1.0, 5.0, -6.04, 1.84, 5.0, 0.0],
    },
    Case {
        text: "Why? Because rhythm and hymns fly by.",
        counts: [2, 7, 0, 7, 6, 0, 8, 29, 29],
        scores: [-0.74, 107.0, 1.4, -0.17, 0.75, 7.14, 0.1, 1.84, 7.14, 2.0],
    },
    Case {
        text: "Sometimes someone somewhere does something somewhat troublesome.",
        counts: [1, 7, 2, 5, 1, 0, 16, 57, 57],
        scores: [14.11, 6.0, 14.2, 20.42, 4.5, 17.86, 27.85, 8.29, 17.86, 16.0],
    },
    Case {
        text: "A quick brown fox jumps over the lazy dog... Really?! Yes.",
        counts: [3, 11, 0, 11, 8, 1, 14, 42, 42],
        scores: [0.86, 95.0, 1.5, -1.61, 0.665, 9.09, -1.42, 1.84, 9.09, 3.0],
    },
    Case {
        text: "Photosynthesis transforms electromagnetic radiation into chemical energy within chloroplasts.",
        counts: [1, 9, 6, 3, 0, 0, 29, 84, 84],
        scores: [25.94, -75.0, 30.3, 27.03, 10.5, 20.0, 35.79, 14.11, 20.0, 23.0],
    },
    Case {
        text: "I am. You are. He is. We were. They was.",
        counts: [5, 10, 0, 10, 8, 0, 12, 26, 26],
        scores: [-0.65, 103.0, 0.8, -8.18, 0.0, 8.0, -15.31, 1.84, 8.0, -1.0],
    },
    Case {
        text: "   Leading and trailing whitespace.   \n\n\n",
        counts: [1, 4, 1, 3, 1, 0, 9, 28, 28],
        scores: [12.52, 12.0, 11.6, 13.54, 2.0, 16.25, 17.96, 6.0, 16.25, 12.0],
    },
    Case {
        text: "Tabs\tbetween\twords. And\ttabs again.",
        counts: [2, 6, 0, 6, 4, 0, 8, 28, 28],
        scores: [1.31, 91.0, 1.2, 2.05, 0.5, 10.0, 1.77, 1.84, 10.0, 4.0],
    },
    Case {
        text: "Line one.\r\n  Line two.\r\n\tLine three.",
        counts: [3, 6, 0, 6, 5, 0, 7, 23, 23],
        scores: [-1.04, 106.0, 0.8, -2.38, 0.0, 7.5, -8.06, 1.84, 7.5, 1.0],
    },
    Case {
        text: "one\u{85}two three.",
        counts: [1, 2, 1, 1, 1, 0, 4, 11, 11],
        scores: [8.79, 36.0, 20.8, 5.48, 1.0, 12.5, 1.74, 6.0, 12.5, 9.0],
    },
    Case {
        text: "Non\u{a0}breaking\u{a0}space here.",
        counts: [1, 4, 0, 4, 2, 0, 6, 20, 20],
        scores: [3.67, 76.0, 1.6, 4.12, 1.0, 12.5, 6.2, 1.84, 12.5, 5.0],
    },
    Case {
        text: "\u{feff}Byte order mark first.",
        counts: [1, 4, 0, 4, 3, 0, 5, 18, 18],
        scores: [0.72, 97.0, 1.6, 1.77, 1.0, 8.75, 3.26, 1.84, 8.75, 3.0],
    },
    Case {
        text: "Ideographic\u{3000}space\u{3000}words.",
        counts: [1, 3, 1, 2, 2, 0, 6, 21, 21],
        scores: [9.18, 35.0, 14.5, 13.04, 1.5, 10.0, 15.49, 6.0, 10.0, 10.0],
    },
    Case {
        text: "Separators\u{2028}  after\u{2029}\tthem.",
        counts: [1, 3, 1, 2, 1, 0, 7, 19, 19],
        scores: [13.11, 6.0, 14.5, 9.9, 1.5, 15.0, 11.57, 6.0, 15.0, 11.0],
    },
    Case {
        text: "It&#39;s &quot;quoted&quot; &amp; not decoded.",
        counts: [1, 5, 1, 4, 3, 0, 8, 22, 22],
        scores: [5.24, 66.0, 10.0, 1.79, 2.5, 11.0, 4.15, 6.0, 11.0, 6.0],
    },
    Case {
        text: "Beautiful queues of yellow created cakes.",
        counts: [1, 6, 1, 5, 2, 0, 12, 35, 35],
        scores: [10.35, 32.0, 9.1, 9.04, 3.0, 15.0, 13.57, 6.0, 15.0, 10.0],
    },
    Case {
        text: "The the the the the. The the.",
        counts: [2, 7, 0, 7, 7, 3, 7, 21, 21],
        scores: [-2.42, 119.0, 1.4, -5.55, 0.0, 5.0, -6.62, 1.84, 5.0, 0.0],
    },
    Case {
        text: "Extraordinarily, incomprehensibly, unquestionably, the responsibilities were overwhelming.",
        counts: [1, 7, 5, 2, 2, 2, 29, 80, 80],
        scores: [36.03, -151.0, 31.4, 35.9, 6.5, 15.71, 47.17, 12.91, 15.71, 25.0],
    },
    Case {
        text: "Short. Words. Only. Here. Now.",
        counts: [5, 5, 0, 5, 3, 0, 7, 21, 21],
        scores: [1.32, 87.0, 0.4, -1.15, -0.5, 11.0, -20.7, 1.84, 11.0, 0.0],
    },
    Case {
        text: "A sentence with a number like 3.14 inside it.",
        counts: [2, 9, 0, 9, 6, 0, 12, 32, 35],
        scores: [1.9, 89.0, 1.8, -0.86, 1.25, 10.0, -1.47, 1.84, 10.0, 3.0],
    },
    Case {
        text: "Ellipses... everywhere... all... the... time...",
        counts: [5, 5, 2, 3, 2, 0, 12, 28, 28],
        scores: [13.12, 3.0, 16.4, 5.45, -0.09999999999999998, 14.0, -12.47, 4.06, 14.0, 7.0],
    },
    Case {
        text: "<ul><li>first item</li><li>second item</li></ul>",
        counts: [1, 3, 1, 2, 1, 0, 7, 19, 19],
        scores: [13.11, 6.0, 14.5, 9.9, 1.5, 15.0, 11.57, 6.0, 15.0, 11.0],
    },
    Case {
        text: "x < y and y > z.",
        counts: [1, 2, 0, 2, 2, 0, 2, 2, 2],
        scores: [-3.01, 120.0, 0.8, -15.72, 0.0, 5.0, -24.72, 1.84, 5.0, -4.0],
    },
    Case {
        text: "\u{c9}migr\u{e9} na\u{ef}ve caf\u{e9} r\u{e9}sum\u{e9}.",
        counts: [1, 4, 0, 4, 4, 0, 4, 15, 15],
        scores: [-2.23, 118.0, 1.6, -1.77, 1.0, 5.0, -1.15, 1.84, 5.0, 1.0],
    },
    Case {
        text: "Help me! Help me! Please, somebody help!",
        counts: [3, 7, 1, 6, 5, 0, 10, 30, 30],
        scores: [2.18, 84.0, 6.6, -0.08, 0.5, 9.29, -3.29, 3.78, 9.29, 4.0],
    },
    Case {
        text: "Antidisestablishmentarianism.",
        counts: [1, 1, 1, 0, 0, 0, 10, 28, 28],
        scores: [102.8, -640.0, 40.4, 110.95, 0.5, 20.0, 119.24, 6.0, 20.0, 52.0],
    },
    Case {
        text: "Conventional wisdom suggests that organizations benefit from transparent communication, yet implementation remains inconsistent across departments and hierarchical levels.",
        counts: [1, 18, 9, 9, 4, 0, 50, 152, 152],
        scores: [24.21, -46.0, 27.2, 27.34, 18.0, 16.67, 32.21, 17.24, 16.67, 22.0],
    },
    Case {
        text: "The end",
        counts: [1, 2, 0, 2, 2, 0, 2, 6, 6],
        scores: [-3.01, 120.0, 0.8, -6.3, 0.0, 5.0, -12.96, 1.84, 5.0, -1.0],
    },
    Case {
        text: "WHAT IS THIS? IT IS LOUD.",
        counts: [2, 6, 0, 6, 6, 0, 6, 18, 18],
        scores: [-2.62, 119.0, 1.2, -5.8, 0.5, 5.0, -8.03, 1.84, 5.0, 0.0],
    },
    Case {
        text: "Mixed CASE words Are Here. the lowercase the.",
        counts: [2, 8, 1, 7, 6, 1, 11, 36, 36],
        scores: [2.2, 86.0, 6.6, 1.77, 1.25, 8.75, 3.26, 4.44, 8.75, 5.0],
    },
    Case {
        text: "Fly by night. Try to cry. Why not?",
        counts: [3, 8, 0, 8, 8, 0, 8, 24, 24],
        scores: [-2.75, 120.0, 1.1, -5.97, 0.33499999999999996, 5.0, -9.26, 1.84, 5.0, -1.0],
    },
];

const fn expected_counts(c: [usize; 9]) -> ContentCounts {
    ContentCounts {
        sentences: c[0],
        words: c[1],
        big_words: c[2],
        small_words: c[3],
        tiny_words: c[4],
        linsear_ignores: c[5],
        syllables: c[6],
        letters: c[7],
        characters: c[8],
    }
}

const fn expected_scores(s: [f64; 10]) -> ReadabilityScores {
    ReadabilityScores {
        flesch_kincaid_grade: s[0],
        flesch_read_ease: s[1],
        gunning_fog: s[2],
        automated_read: s[3],
        linsear_write: s[4],
        forecast_read: s[5],
        coleman_liau: s[6],
        smog_index: s[7],
        fry_read: s[8],
        average_score: s[9],
    }
}

#[test]
fn counts_match_reference() {
    for case in CASES {
        assert_eq!(
            count_content(case.text),
            expected_counts(case.counts),
            "counts for {:?}",
            case.text
        );
    }
}

#[test]
fn scores_match_reference() {
    for case in CASES {
        assert_eq!(
            score_readability(case.text),
            expected_scores(case.scores),
            "scores for {:?}",
            case.text
        );
    }
}
