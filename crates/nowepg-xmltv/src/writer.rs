//! XMLTV document emission.
//!
//! Output structure follows what `mythfilldatabase` and compatible
//! importers expect: a `tv` root with fixed generator attributes, one
//! `channel` element per identifier (two identical `display-name`
//! children, kept intentionally for downstream compatibility), then one
//! `programme` element per record in aggregate order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use nowepg_api::nowtv::{Programme, ScheduleAggregate};

use crate::timestamp::format_xmltv;

/// `generator-info-name` attribute on the root element.
pub const GENERATOR_INFO_NAME: &str = "NowTVGenerator";
/// `generator-info-url` attribute on the root element.
pub const GENERATOR_INFO_URL: &str = "http://www.example.com/";

/// Placeholder `url` child of every channel element.
const CHANNEL_URL: &str = "http://www.example.com";

/// Emit a progress event after this many programme elements.
const PROGRESS_INTERVAL: usize = 500;

/// Writes one `channel` element.
fn write_channel<W: Write>(writer: &mut Writer<W>, channel: &str) -> Result<()> {
    let mut start = BytesStart::new("channel");
    start.push_attribute(("id", channel));
    writer.write_event(Event::Start(start))?;

    for _ in 0..2 {
        writer
            .create_element("display-name")
            .with_attribute(("lang", "en"))
            .write_text_content(BytesText::new(channel))?;
    }
    writer
        .create_element("url")
        .write_text_content(BytesText::new(CHANNEL_URL))?;

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    Ok(())
}

/// Writes one `programme` element.
///
/// `title` and `desc` text is entity-escaped by `BytesText`; attribute
/// values (timestamps, channel identifiers) contain no reserved
/// characters in this schema.
fn write_programme<W: Write>(writer: &mut Writer<W>, programme: &Programme) -> Result<()> {
    let start_str = format_xmltv(programme.start);
    let stop_str = format_xmltv(programme.end);

    let mut start = BytesStart::new("programme");
    start.push_attribute(("start", start_str.as_str()));
    start.push_attribute(("stop", stop_str.as_str()));
    start.push_attribute(("channel", programme.channel.as_str()));
    writer.write_event(Event::Start(start))?;

    writer
        .create_element("title")
        .with_attribute(("lang", "en"))
        .write_text_content(BytesText::new(&programme.name))?;
    writer
        .create_element("sub-title")
        .with_attribute(("lang", "en"))
        .write_empty()?;
    writer
        .create_element("desc")
        .write_text_content(BytesText::new(&programme.description))?;

    writer.write_event(Event::End(BytesEnd::new("programme")))?;
    Ok(())
}

/// Serializes the aggregate as an XMLTV document into `sink`.
///
/// Channels and programmes are written in aggregate order, so identical
/// input produces byte-identical output.
///
/// # Errors
///
/// Returns an error if writing to `sink` fails.
#[allow(clippy::arithmetic_side_effects)]
pub fn write_to<W: Write>(aggregate: &ScheduleAggregate, sink: W) -> Result<()> {
    let mut writer = Writer::new(sink);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut tv = BytesStart::new("tv");
    tv.push_attribute(("generator-info-name", GENERATOR_INFO_NAME));
    tv.push_attribute(("generator-info-url", GENERATOR_INFO_URL));
    writer.write_event(Event::Start(tv))?;

    for channel in &aggregate.channels {
        write_channel(&mut writer, channel)
            .with_context(|| format!("failed to write channel element for {channel}"))?;
    }

    let mut written: usize = 0;
    for programme in &aggregate.programmes {
        write_programme(&mut writer, programme).with_context(|| {
            format!("failed to write programme element for {}", programme.channel)
        })?;
        written += 1;
        if written % PROGRESS_INTERVAL == 0 {
            tracing::info!(written, "Processed programmes");
        }
    }

    writer.write_event(Event::End(BytesEnd::new("tv")))?;
    Ok(())
}

/// Serializes the aggregate to a file, flushing before returning.
///
/// A write failure can leave a partial file behind; callers that need a
/// clean failure mode should only invoke this once aggregation has
/// fully succeeded.
///
/// # Errors
///
/// Returns an error if the file cannot be created or any write/flush fails.
pub fn write_file(aggregate: &ScheduleAggregate, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut sink = BufWriter::new(file);
    write_to(aggregate, &mut sink)?;
    sink.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
