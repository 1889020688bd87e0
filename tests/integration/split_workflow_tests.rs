/*!
 * End-to-end tests for splitting one bilingual file
 */

use anyhow::Result;
use std::fs;
use std::path::Path;

use bisplit::app_config::Config;
use bisplit::document::{Asset, Bundle, ReaderManager, TransPair};
use bisplit::errors::SplitError;
use bisplit::splitter::{FileEmitter, Splitter};
use crate::common::{self, Content, mock_readers::StaticReader};

fn static_splitter(bundle: Bundle, output_dir: &Path) -> Splitter {
    let mut readers = ReaderManager::new();
    readers.register(StaticReader::new("xliff", bundle));
    Splitter::new(readers, FileEmitter::new(output_dir))
}

#[test]
fn test_split_withSingleAsset_shouldWriteBothLanguages() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("out");
    let input = common::create_test_file(temp_dir.path(), "job.xliff", "")?;
    let splitter = static_splitter(Bundle::new(vec![common::hello_asset()]), &out_dir);

    let written = splitter.split(&input)?;

    let en = out_dir.join("job.xliff-doc.html (en).xml");
    let fr = out_dir.join("job.xliff-doc.html (fr).xml");
    assert_eq!(written, vec![en.clone(), fr.clone()]);

    let en_text = fs::read_to_string(&en)?;
    assert!(en_text.contains("<seg id=\"1\" xml:space=\"preserve\">Hello</seg>"));
    assert!(en_text.contains("xml:lang=\"en\""));

    let fr_parsed = common::parse_output(&fr)?;
    assert_eq!(fr_parsed.lang, "fr");
    assert_eq!(fr_parsed.name, "job.xliff-doc.html");
    assert_eq!(fr_parsed.segs[0].content, vec![Content::text("Bonjour")]);
    Ok(())
}

#[test]
fn test_split_withStructuralPair_shouldOmitItFromBothFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "job.xliff", "")?;
    let asset = Asset::new("doc.html", "en", "fr")
        .with_pair(TransPair::new("0", 0, "skeleton".into(), "squelette".into()))
        .with_pair(TransPair::new("1", 1, "Hello".into(), "Bonjour".into()));
    let splitter = static_splitter(Bundle::new(vec![asset]), temp_dir.path());

    let written = splitter.split(&input)?;

    for path in &written {
        let parsed = common::parse_output(path)?;
        let ids: Vec<_> = parsed.segs.iter().map(|seg| seg.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
        let text = fs::read_to_string(path)?;
        assert!(!text.contains("skeleton"));
        assert!(!text.contains("squelette"));
    }
    Ok(())
}

#[test]
fn test_split_withNoAssets_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("out");
    let input = common::create_test_file(temp_dir.path(), "empty.xliff", "")?;
    let splitter = static_splitter(Bundle::default(), &out_dir);

    let err = splitter.split(&input).unwrap_err();

    assert!(matches!(err, SplitError::NoUsableContents { .. }));
    let message = err.to_string();
    assert!(message.to_lowercase().contains("no usable contents"));
    assert!(message.contains("empty.xliff"));
    assert!(!out_dir.exists());
    Ok(())
}

#[test]
fn test_split_withMissingInput_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let splitter = static_splitter(Bundle::new(vec![common::hello_asset()]), temp_dir.path());

    let err = splitter.split(temp_dir.path().join("missing.xliff")).unwrap_err();

    match err {
        SplitError::Read { message, .. } => assert!(message.contains("missing.xliff")),
        other => panic!("expected read error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_split_withMultipleAssets_shouldWriteSourceThenTargetPerAsset() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "job.xliff", "")?;
    let bundle = Bundle::new(vec![common::hello_asset(), common::rich_asset()]);
    let splitter = static_splitter(bundle, temp_dir.path());

    let written = splitter.split(&input)?;

    let names: Vec<_> = written
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "job.xliff-doc.html (en).xml",
            "job.xliff-doc.html (fr).xml",
            "job.xliff-page.htm (en-US).xml",
            "job.xliff-page.htm (de-DE).xml",
        ]
    );

    let source = common::parse_output(&written[2])?;
    assert_eq!(source.segs[1].content, vec![Content::text("Fish & chips <cheap>")]);
    Ok(())
}

#[test]
fn test_split_withJsonBundle_shouldRunThroughBuiltInReader() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("out");
    let input = common::write_bundle_json(
        temp_dir.path(),
        "bundle.json",
        &Bundle::new(vec![common::rich_asset()]),
    )?;
    let config = Config {
        output_dir: out_dir.clone(),
        ..Config::default()
    };
    let splitter = Splitter::from_config(&config);

    let written = splitter.split(&input)?;

    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|path| path.starts_with(&out_dir)));

    let target = common::parse_output(&out_dir.join("bundle.json-page.htm (de-DE).xml"))?;
    assert_eq!(target.segs.len(), 2);
    assert_eq!(
        target.segs[0].content,
        vec![Content::text("Drücken Sie "), Content::Tag, Content::text("OK"), Content::Tag]
    );
    assert_eq!(target.segs[1].content, vec![Content::text("Backfisch & Pommes")]);
    Ok(())
}

#[test]
fn test_split_twice_shouldProduceIdenticalFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "job.xliff", "")?;
    let splitter = static_splitter(Bundle::new(vec![common::rich_asset()]), temp_dir.path());

    let first = splitter.split(&input)?;
    let first_contents = first.iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?;

    let second = splitter.split(&input)?;
    let second_contents = second.iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?;

    assert_eq!(first, second);
    assert_eq!(first_contents, second_contents);
    Ok(())
}
