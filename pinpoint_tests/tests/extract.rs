use pinpoint::{
    config::{CollapseStrategy, Config},
    structures::{axiom::AxiomId, index_map::IndexMap},
    types::err::{self},
};

use pinpoint_tests::{
    data_subdir, dir_entries, extract_dir, extract_to, init_logger, open, scratch_dir,
};

mod basic {
    use super::*;

    #[test]
    fn expected_artifacts() {
        init_logger();
        let dir = data_subdir(vec!["extract", "basic"]);
        let extraction = extract_dir(&dir, &Config::default()).unwrap();

        let fragment = std::fs::read_to_string(dir.join("expected.krss")).unwrap();
        let map = std::fs::read_to_string(dir.join("expected.map")).unwrap();

        assert_eq!(extraction.fragment(), fragment);
        assert_eq!(extraction.index_map.to_string(), map);
    }

    #[test]
    fn sequence_follows_module() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let extraction = extract_dir(&dir, &Config::default()).unwrap();

        let module = [4, 2, 3, 1].map(AxiomId);
        for (position, entry) in extraction.index_map.entries().iter().enumerate() {
            assert_eq!(entry.sequence_index, position + 1);
            assert_eq!(entry.original_id, module[position]);
        }
        assert_eq!(extraction.axioms.len(), module.len());
    }

    #[test]
    fn map_translates_both_ways() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let map = IndexMap::read(open(&dir.join("expected.map"))).unwrap();

        assert_eq!(map.original_of(2), Ok(AxiomId(2)));
        assert_eq!(map.original_of(1), Ok(AxiomId(4)));
        assert_eq!(map.sequence_of(AxiomId(1)), Ok(4));
        assert_eq!(map.text_of(3), Ok("(implies-role r s)"));

        for entry in map.entries() {
            assert_eq!(map.sequence_of(entry.original_id), Ok(entry.sequence_index));
        }

        assert_eq!(
            map.original_of(5),
            Err(err::IndexError::FaultyReference("5".to_string()))
        );
        assert!(map.sequence_of(AxiomId(9)).is_err());
    }

    #[test]
    fn written_map_reads_back() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let extraction = extract_dir(&dir, &Config::default()).unwrap();

        let written = extraction.index_map.to_string();
        let read = IndexMap::read(written.as_bytes()).unwrap();
        assert_eq!(read.entries(), extraction.index_map.entries());
    }

    #[test]
    fn converse_strategy_and_marker() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let mut config = Config::default();
        config.collapse.value = CollapseStrategy::Converse;
        config.equivalence_marker = "(equiv".to_string();

        let extraction = extract_dir(&dir, &config).unwrap();
        assert_eq!(extraction.index_map.text_of(2), Ok("(equiv B C)"));
    }
}

#[test]
fn faulty_reference() {
    let dir = data_subdir(vec!["extract", "faulty"]);
    assert_eq!(
        extract_dir(&dir, &Config::default()).unwrap_err(),
        err::ErrorKind::Extract(err::ExtractError::FaultyReference(AxiomId(9)))
    );
}

#[test]
fn ambiguous_definition() {
    let dir = data_subdir(vec!["extract", "ambiguous"]);
    let result = extract_dir(&dir, &Config::default());
    assert_eq!(
        result.unwrap_err(),
        err::ErrorKind::Extract(err::ExtractError::AmbiguousDefinition {
            id: AxiomId(7),
            count: 3
        })
    );
    assert_eq!(
        err::ErrorKind::Extract(err::ExtractError::AmbiguousDefinition {
            id: AxiomId(7),
            count: 3
        })
        .fault(),
        "AmbiguousDefinition"
    );
}

#[test]
fn malformed_map() {
    assert!(matches!(
        IndexMap::read("1 4 a b\n3 2 c d\n".as_bytes()),
        Err(err::ErrorKind::Index(err::IndexError::Sequence { line: 2, found: 3 }))
    ));
}

mod artifacts {
    use super::*;

    #[test]
    fn written_as_expected() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let out = scratch_dir("written_as_expected");

        let (fragment, map) = extract_to(&dir, &out, "query_4", &Config::default()).unwrap();
        assert_eq!(fragment, out.join("query_4.krss"));
        assert_eq!(map, out.join("query_4.map"));
        assert_eq!(dir_entries(&out), vec!["query_4.krss", "query_4.map"]);

        assert_eq!(
            std::fs::read_to_string(fragment).unwrap(),
            std::fs::read_to_string(dir.join("expected.krss")).unwrap()
        );
        assert_eq!(
            std::fs::read_to_string(map).unwrap(),
            std::fs::read_to_string(dir.join("expected.map")).unwrap()
        );
    }

    #[test]
    fn fault_writes_nothing() {
        let dir = data_subdir(vec!["extract", "faulty"]);
        let out = scratch_dir("fault_writes_nothing");

        assert_eq!(
            extract_to(&dir, &out, "query_9", &Config::default()).unwrap_err(),
            err::ErrorKind::Extract(err::ExtractError::FaultyReference(AxiomId(9)))
        );
        assert!(dir_entries(&out).is_empty());
    }

    #[test]
    fn failed_map_removes_fragment() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let out = scratch_dir("failed_map_removes_fragment");
        std::fs::create_dir(out.join("q.map")).unwrap();

        let result = extract_to(&dir, &out, "q", &Config::default());
        assert!(matches!(result, Err(err::ErrorKind::Write(_))));
        assert_eq!(dir_entries(&out), vec!["q.map"]);
    }

    #[test]
    fn failed_fragment_leaves_nothing() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let out = scratch_dir("failed_fragment_leaves_nothing");
        std::fs::create_dir(out.join("q.krss.part")).unwrap();

        let result = extract_to(&dir, &out, "q", &Config::default());
        assert!(matches!(result, Err(err::ErrorKind::Write(_))));
        assert_eq!(dir_entries(&out), vec!["q.krss.part"]);
    }

    #[test]
    fn stale_artifacts_removed_on_failure() {
        let dir = data_subdir(vec!["extract", "basic"]);
        let out = scratch_dir("stale_artifacts_removed_on_failure");
        std::fs::write(out.join("q.krss"), "stale\n").unwrap();
        std::fs::create_dir(out.join("q.map.part")).unwrap();

        assert!(extract_to(&dir, &out, "q", &Config::default()).is_err());
        assert_eq!(dir_entries(&out), vec!["q.map.part"]);
    }

    #[test]
    fn module_from_last_line() {
        let dir = data_subdir(vec!["extract", "basic"]);

        let extraction = pinpoint::procedures::extract::extract(
            open(&dir.join("gci")),
            open(&dir.join("ri")),
            "4 2 0\n1 3 0\n".as_bytes(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(
            extraction.fragment(),
            "(implies A B)\n(implies-role r s)\n"
        );
    }
}
