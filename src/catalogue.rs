//! Registry of every topic and the glue that runs one from a binary.

use std::io;

use tracing::info;

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::intermediate::{distinct, filter, flat_map, limit_skip, map, parallel, peek, sorted};
use crate::logging;
use crate::report::Report;
use crate::terminal::{collect, count, for_each, match_find, min_max, reduce, to_array};

pub type RunFn = fn(&mut Report<'_>, &Config) -> Result<()>;

#[derive(Debug)]
pub struct Topic {
    pub name: &'static str,
    pub bin: &'static str,
    pub summary: &'static str,
    pub run: RunFn,
}

pub const TOPICS: &[Topic] = &[
    Topic {
        name: "filter",
        bin: "p1_filter",
        summary: "Keep elements that satisfy a predicate",
        run: filter::run,
    },
    Topic {
        name: "map",
        bin: "p1_map",
        summary: "Transform each element",
        run: map::run,
    },
    Topic {
        name: "flat_map",
        bin: "p1_flat_map",
        summary: "Expand each element into many and flatten",
        run: flat_map::run,
    },
    Topic {
        name: "distinct",
        bin: "p1_distinct",
        summary: "Drop repeats, keeping first occurrences",
        run: distinct::run,
    },
    Topic {
        name: "sorted",
        bin: "p1_sorted",
        summary: "Stable sorts by natural order and by keys",
        run: sorted::run,
    },
    Topic {
        name: "limit_skip",
        bin: "p1_limit_skip",
        summary: "take / skip and pagination",
        run: limit_skip::run,
    },
    Topic {
        name: "peek",
        bin: "p1_peek",
        summary: "Observe elements mid-pipeline with inspect",
        run: peek::run,
    },
    Topic {
        name: "collect",
        bin: "p2_collect",
        summary: "Collect into sets, strings, groups and partitions",
        run: collect::run,
    },
    Topic {
        name: "count",
        bin: "p2_count",
        summary: "Count surviving elements",
        run: count::run,
    },
    Topic {
        name: "for_each",
        bin: "p2_for_each",
        summary: "Side effects per element",
        run: for_each::run,
    },
    Topic {
        name: "match_find",
        bin: "p2_match_find",
        summary: "any / all / none and find",
        run: match_find::run,
    },
    Topic {
        name: "min_max",
        bin: "p2_min_max",
        summary: "Smallest and largest by value or key",
        run: min_max::run,
    },
    Topic {
        name: "reduce",
        bin: "p2_reduce",
        summary: "Fold a pipeline into a single value",
        run: reduce::run,
    },
    Topic {
        name: "to_array",
        bin: "p2_to_array",
        summary: "Collect into boxed slices and fixed arrays",
        run: to_array::run,
    },
    Topic {
        name: "parallel",
        bin: "p3_parallel_streams",
        summary: "Rayon parallel iterators and timing comparisons",
        run: parallel::run,
    },
];

/// Look a topic up by name or binary name.
pub fn find(name: &str) -> Result<&'static Topic> {
    let wanted = name.trim().to_lowercase();
    TOPICS
        .iter()
        .find(|t| t.name == wanted || t.bin == wanted)
        .ok_or_else(|| PipelineError::UnknownTopic {
            name: name.to_string(),
            suggestion: closest(&wanted).map(str::to_string),
        })
}

fn closest(wanted: &str) -> Option<&'static str> {
    TOPICS
        .iter()
        .map(|t| (edit_distance(wanted, t.name), t.name))
        .filter(|&(d, _)| d <= 3)
        .min_by_key(|&(d, _)| d)
        .map(|(_, name)| name)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

pub fn run_topic(topic: &Topic, report: &mut Report<'_>, config: &Config) -> Result<()> {
    info!(topic = topic.name, "running");
    report.banner(&format!("{} ({})", topic.name.to_uppercase(), topic.summary))?;
    (topic.run)(report, config)?;
    report.flush()
}

/// Entry point shared by the per-topic binaries.
pub fn standalone(name: &str) -> Result<()> {
    logging::init(0, false);
    let config = Config::load(None)?;
    let topic = find(name)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut report = Report::new(&mut out, config.output.color);
    run_topic(topic, &mut report, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = TOPICS.iter().map(|t| t.name).collect();
        let bins: HashSet<_> = TOPICS.iter().map(|t| t.bin).collect();
        assert_eq!(names.len(), TOPICS.len());
        assert_eq!(bins.len(), TOPICS.len());
    }

    #[test]
    fn test_find_by_name_or_bin() {
        assert_eq!(find("reduce").unwrap().bin, "p2_reduce");
        assert_eq!(find("P1_FILTER").unwrap().name, "filter");
        assert_eq!(find("p3_parallel_streams").unwrap().name, "parallel");
    }

    #[test]
    fn test_topic_debug_names_binary() {
        let topic = find("map").unwrap();
        assert!(format!("{topic:?}").contains("p1_map"));
    }

    #[test]
    fn test_unknown_topic_suggests() {
        let err = find("redcue").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown topic 'redcue', did you mean 'reduce'?"
        );

        let err = find("quantum").unwrap_err();
        assert!(matches!(err, PipelineError::UnknownTopic { suggestion: None, .. }));
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("map", "map"), 0);
    }

    #[test]
    fn test_every_sequential_topic_runs() {
        let config = Config::default();
        for topic in TOPICS.iter().filter(|t| t.name != "parallel") {
            let text = render(|report| run_topic(topic, report, &config));
            assert!(text.contains(&topic.name.to_uppercase()), "{}", topic.name);
            assert!(text.contains("Input: "), "{}", topic.name);
        }
    }
}
