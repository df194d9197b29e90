/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Loading cluster schemas from Matter IDL (`.matter`) files.
//!
//! Only what a schema needs is extracted: cluster names and codes, and the
//! names and codes of attributes, events and commands. Type definitions,
//! access rules and endpoint compositions are parsed just enough to be
//! skipped.

use miette::{Diagnostic, NamedSource, SourceSpan};
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, tag_no_case, take_until, take_while, take_while1},
    character::complete::{digit1, hex_digit1, multispace1, satisfy},
    combinator::{map, map_opt, not, opt, recognize, value},
    error::{make_error, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult, InputTake, Parser,
};
use nom_greedyerror::GreedyError;
use nom_locate::LocatedSpan;
use nom_supreme::ParserExt;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::BuildError;
use crate::ids::FieldId;
use crate::schema::ClusterSchema;

type Span<'a> = LocatedSpan<&'a str>;
type ParseError<'a> = GreedyError<Span<'a>, ErrorKind>;

/// Fetch the deepest location of an error within an error type
trait DeepestIndex {
    fn deepest_index(&self) -> Option<usize>;
}

impl<E> DeepestIndex for nom::Err<E>
where
    E: DeepestIndex,
{
    fn deepest_index(&self) -> Option<usize> {
        match self {
            nom::Err::Error(e) => e.deepest_index(),
            nom::Err::Failure(e) => e.deepest_index(),
            nom::Err::Incomplete(_) => None,
        }
    }
}

impl DeepestIndex for GreedyError<Span<'_>, ErrorKind> {
    fn deepest_index(&self) -> Option<usize> {
        self.errors.iter().map(|(p, _k)| p.location_offset()).max()
    }
}

/// Keeps the deepest of several failed alternatives, which is the one
/// worth reporting.
#[derive(Debug, Clone)]
struct DeepestError<E> {
    deepest: Option<(usize, E)>,
}

impl<E> DeepestError<E>
where
    E: DeepestIndex + Clone,
{
    fn new() -> Self {
        Self { deepest: None }
    }

    fn or(self, e: E) -> E {
        match self.deepest {
            Some((_, deepest)) => deepest,
            None => e,
        }
    }

    fn intercept<O>(&mut self, data: Result<O, E>) -> Result<O, E> {
        if let Err(ref e) = data {
            if let Some(depth) = e.deepest_index() {
                let current = self.deepest.as_ref().map(|(d, _)| *d).unwrap_or(0);
                if current < depth {
                    self.deepest = Some((depth, e.clone()));
                }
            }
        }
        data
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMaturity {
    #[default]
    Stable,
    Provisional,
    Internal,
    Deprecated,
}

/// A named, coded member of a cluster (attribute, event or command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdlField<'a> {
    pub name: &'a str,
    pub code: u64,
}

/// The parts of an IDL cluster definition relevant to a schema.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IdlCluster<'a> {
    pub name: &'a str,
    pub code: u64,
    pub maturity: ApiMaturity,
    pub revision: u64,
    pub attributes: Vec<IdlField<'a>>,
    pub events: Vec<IdlField<'a>>,
    pub commands: Vec<IdlField<'a>>,
}

impl IdlCluster<'_> {
    /// Convert into a [`ClusterSchema`].
    ///
    /// Attribute names are declared in lowerCamelCase in IDL and get their
    /// first letter upper-cased (see [`attribute_name`]); event and command
    /// names are kept as written.
    pub fn to_schema(&self) -> Result<ClusterSchema, BuildError> {
        let mut builder =
            ClusterSchema::builder(narrow("Cluster", self.code)?, self.name.to_owned());

        for attr in &self.attributes {
            builder.attribute(narrow("Attribute", attr.code)?, attribute_name(attr.name))?;
        }
        for event in &self.events {
            builder.event(narrow("Event", event.code)?, event.name.to_owned())?;
        }
        for cmd in &self.commands {
            builder.command(narrow("Command", cmd.code)?, cmd.name.to_owned())?;
        }

        Ok(builder.build())
    }
}

fn narrow(what: &'static str, code: u64) -> Result<FieldId, BuildError> {
    FieldId::try_from(code).map_err(|_| BuildError::IdOutOfRange { what, code })
}

/// Converts an IDL attribute name into the name used by the registry.
///
/// Examples:
///
/// ```
/// use rs_matter_schema::idl::attribute_name;
///
/// assert_eq!(attribute_name("clusterRevision"), "ClusterRevision");
/// assert_eq!(attribute_name("onOff"), "OnOff");
/// assert_eq!(attribute_name("PIROccupiedToUnoccupiedDelay"), "PIROccupiedToUnoccupiedDelay");
/// assert_eq!(attribute_name(""), "");
/// ```
pub fn attribute_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A case-insensitive keyword that is not the prefix of a longer identifier.
fn keyword<'a>(
    word: &'static str,
) -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Span<'a>, ParseError<'a>> {
    terminated(
        tag_no_case(word),
        not(satisfy(|c: char| c.is_ascii_alphanumeric() || c == '_')),
    )
}

/// A parser that CANNOT fail: no maturity prefix means 'STABLE'.
fn api_maturity(span: Span) -> IResult<Span, ApiMaturity, ParseError> {
    for (word, maturity) in [
        ("stable", ApiMaturity::Stable),
        ("provisional", ApiMaturity::Provisional),
        ("internal", ApiMaturity::Internal),
        ("deprecated", ApiMaturity::Deprecated),
    ] {
        if let Ok((span, _)) = keyword(word)(span) {
            return Ok((span, maturity));
        }
    }

    Ok((span, ApiMaturity::Stable))
}

fn hex_integer(span: Span) -> IResult<Span, u64, ParseError> {
    map_opt(hex_digit1::<Span, ParseError>.preceded_by(tag_no_case("0x")), |r: Span| {
        u64::from_str_radix(r.fragment(), 16).ok()
    })
    .parse(span)
}

fn decimal_integer(span: Span) -> IResult<Span, u64, ParseError> {
    map_opt(digit1::<Span, ParseError>, |s: Span| {
        s.fragment().parse::<u64>().ok()
    })
    .parse(span)
}

/// Parses a positive integer (hex or decimal)
///
/// Examples:
///
/// ```
/// use rs_matter_schema::idl::positive_integer;
///
/// let result = positive_integer("12 abc".into()).expect("Valid");
/// assert_eq!(result.0.fragment().to_string(), " abc");
/// assert_eq!(result.1, 12);
///
/// let result = positive_integer("0xFFF1FC05;".into()).expect("Valid");
/// assert_eq!(result.0.fragment().to_string(), ";");
/// assert_eq!(result.1, 0xFFF1_FC05);
///
/// assert!(positive_integer("0x10000000000000000".into()).is_err());
/// ```
pub fn positive_integer(span: Span) -> IResult<Span, u64, ParseError> {
    // a 0x prefix commits to hex, so that an overflowing 0x123... is not
    // read as 0 followed by "x123..."
    if tag_no_case::<_, _, ()>("0x").parse(span).is_ok() {
        return hex_integer(span);
    }
    decimal_integer(span)
}

/// Parses one comment or run of whitespace.
fn whitespace_group(span: Span) -> IResult<Span, (), ParseError> {
    if let Ok((span, _)) = preceded(tag::<_, _, ()>("//"), opt(is_not("\n\r"))).parse(span) {
        return Ok((span, ()));
    }

    if let Ok((span, _)) =
        delimited(tag::<_, _, ()>("/*"), take_until("*/"), tag("*/")).parse(span)
    {
        return Ok((span, ()));
    }

    value((), multispace1).parse(span)
}

/// Parses 0 or more whitespaces and comments. It can NEVER fail.
fn whitespace0(span: Span) -> IResult<Span, (), ParseError> {
    let mut rest = span;
    while let Ok((tail, _)) = whitespace_group(rest) {
        rest = tail;
    }
    Ok((rest, ()))
}

/// Parses at least one whitespace or comment.
fn whitespace1(span: Span) -> IResult<Span, (), ParseError> {
    let parsed = whitespace0(span)?;

    if span == parsed.0 {
        // this WILL fail, using it as such just to get a proper error
        multispace1::<_, ParseError>(span)?;
    }

    Ok(parsed)
}

/// Parses a name id, of the form /[a-zA-Z_][a-zA-Z0-9_]*/
fn parse_id(span: Span) -> IResult<Span, &str, ParseError> {
    let valid_first = |c: char| c.is_ascii_alphabetic() || c == '_';
    let valid_second = |c: char| c.is_ascii_alphanumeric() || c == '_';
    map(
        recognize(tuple((take_while1(valid_first), take_while(valid_second)))),
        |data: Span| *data.fragment(),
    )(span)
}

/// Skips any of the given whitespace-separated qualifiers (e.g. `readonly`).
fn skip_qualifiers<'a>(span: Span<'a>, allowed: &[&'static str]) -> Span<'a> {
    let mut rest = span;
    loop {
        let Ok((start, _)) = whitespace0(rest) else {
            return rest;
        };
        match allowed.iter().find_map(|word| keyword(*word)(start).ok()) {
            Some((tail, _)) => rest = tail,
            None => return rest,
        }
    }
}

/// Skips a balanced `{ ... }` block, including nested blocks, string
/// literals and comments.
fn braced_block(span: Span) -> IResult<Span, (), ParseError> {
    let (span, _) = tag("{")(span)?;

    let text = *span.fragment();
    let bytes = text.as_bytes();
    let mut depth = 1;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let (rest, _) = span.take_split(pos + 1);
                    return Ok((rest, ()));
                }
            }
            b'"' => {
                pos += 1;
                while pos < bytes.len() && bytes[pos] != b'"' {
                    if bytes[pos] == b'\\' {
                        pos += 1;
                    }
                    pos += 1;
                }
            }
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                while pos < bytes.len() && bytes[pos] != b'\n' {
                    pos += 1;
                }
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => match text[pos + 2..].find("*/") {
                Some(end) => pos += end + 3,
                None => break,
            },
            _ => {}
        }
        pos += 1;
    }

    Err(nom::Err::Error(make_error(span, ErrorKind::TakeUntil)))
}

/// `access(read: view, write: manage)` and the like. Privileges are not
/// part of a schema and are ignored.
fn access_clause(span: Span) -> IResult<Span, (), ParseError> {
    value(
        (),
        tuple((
            keyword("access"),
            whitespace0,
            tag("("),
            separated_list0(
                tag(","),
                tuple((whitespace0, parse_id, whitespace0, tag(":"), whitespace0, parse_id, whitespace0)),
            ),
            tag(")"),
        )),
    )
    .parse(span)
}

fn revision(span: Span) -> IResult<Span, u64, ParseError> {
    delimited(
        tuple((keyword("revision"), whitespace1)),
        positive_integer,
        tuple((whitespace0, tag(";"))),
    )
    .parse(span)
}

/// Parses an attribute declaration such as
/// `readonly attribute access(read: manage) optional int8u<4> values[] = 0x12;`
fn attribute(span: Span) -> IResult<Span, IdlField, ParseError> {
    let span = skip_qualifiers(span, &["readonly", "nosubscribe", "timedwrite"]);

    let (span, _) = tuple((
        whitespace0,
        keyword("attribute"),
        whitespace1,
        opt(terminated(access_clause, whitespace0)),
        api_maturity,
    ))
    .parse(span)?;
    let span = skip_qualifiers(span, &["optional", "nullable", "fabric_sensitive"]);

    tuple((
        preceded(whitespace0, parse_id),
        opt(tuple((
            whitespace0,
            tag("<"),
            whitespace0,
            positive_integer,
            whitespace0,
            tag(">"),
        ))),
        preceded(whitespace1, parse_id),
        opt(tuple((whitespace0, tag("["), whitespace0, tag("]")))),
        preceded(tuple((whitespace0, tag("="), whitespace0)), positive_integer),
        tuple((whitespace0, tag(";"))),
    ))
    .map(|(_, _, name, _, code, _)| IdlField { name, code })
    .parse(span)
}

/// Parses a command declaration such as
/// `timed command access(invoke: administer) Foo(FooRequest): DefaultSuccess = 3;`
fn command(span: Span) -> IResult<Span, IdlField, ParseError> {
    let span = skip_qualifiers(span, &["timed", "fabric"]);

    tuple((
        tuple((whitespace0, keyword("command"), whitespace0)),
        opt(terminated(access_clause, whitespace0)),
        parse_id,
        tuple((whitespace0, tag("("), whitespace0)),
        opt(parse_id),
        tuple((whitespace0, tag(")"), whitespace0, tag(":"), whitespace0)),
        parse_id,
        preceded(tuple((whitespace0, tag("="), whitespace0)), positive_integer),
        tuple((whitespace0, tag(";"))),
    ))
    .map(|(_, _, name, _, _, _, _, code, _)| IdlField { name, code })
    .parse(span)
}

/// Parses an event declaration such as
/// `critical event access(read: administer) Foo = 1 { int8u bar = 0; }`
fn event(span: Span) -> IResult<Span, IdlField, ParseError> {
    let span = skip_qualifiers(span, &["fabric_sensitive"]);

    tuple((
        preceded(
            whitespace0,
            alt((keyword("info"), keyword("critical"), keyword("debug"))),
        ),
        tuple((whitespace1, keyword("event"), whitespace1)),
        opt(terminated(access_clause, whitespace0)),
        parse_id,
        preceded(tuple((whitespace0, tag("="), whitespace0)), positive_integer),
        preceded(whitespace0, braced_block),
    ))
    .map(|(_, _, _, name, code, _)| IdlField { name, code })
    .parse(span)
}

/// Skips an `enum`, `bitmap` or `struct` definition.
fn type_definition(span: Span) -> IResult<Span, (), ParseError> {
    let (span, _) = opt(terminated(
        alt((keyword("request"), keyword("response"), keyword("shared"))),
        whitespace1,
    ))
    .parse(span)?;
    let span = skip_qualifiers(span, &["fabric_scoped"]);

    value(
        (),
        tuple((
            whitespace0,
            alt((keyword("enum"), keyword("bitmap"), keyword("struct"))),
            whitespace1,
            parse_id,
            opt(is_not("{;")),
            braced_block,
        )),
    )
    .parse(span)
}

enum Member<'a> {
    Revision(u64),
    Attribute(IdlField<'a>),
    Command(IdlField<'a>),
    Event(IdlField<'a>),
    TypeDefinition,
}

fn cluster_member<'a>(
    span: Span<'a>,
    deepest: &mut DeepestError<nom::Err<ParseError<'a>>>,
) -> Option<(Span<'a>, Member<'a>)> {
    let (span, _) = tuple((api_maturity, whitespace0)).parse(span).ok()?;

    if let Ok((rest, r)) = deepest.intercept(revision(span)) {
        return Some((rest, Member::Revision(r)));
    }
    if let Ok((rest, a)) = deepest.intercept(attribute(span)) {
        return Some((rest, Member::Attribute(a)));
    }
    if let Ok((rest, c)) = deepest.intercept(command(span)) {
        return Some((rest, Member::Command(c)));
    }
    if let Ok((rest, e)) = deepest.intercept(event(span)) {
        return Some((rest, Member::Event(e)));
    }
    if let Ok((rest, _)) = deepest.intercept(type_definition(span)) {
        return Some((rest, Member::TypeDefinition));
    }
    None
}

fn cluster(span: Span) -> IResult<Span, IdlCluster, ParseError> {
    let (span, maturity) = terminated(api_maturity, whitespace0).parse(span)?;

    let (span, (name, code)) = delimited(
        tuple((
            opt(tuple((alt((keyword("client"), keyword("server"))), whitespace1))),
            keyword("cluster"),
            whitespace1,
        )),
        tuple((parse_id, whitespace0, tag("="), whitespace0, positive_integer))
            .map(|(name, _, _, _, code)| (name, code)),
        whitespace0,
    )
    .parse(span)?;

    let mut cluster = IdlCluster {
        name,
        code,
        maturity,
        ..Default::default()
    };

    let (mut span, _) = tag("{")(span)?;
    let mut deepest = DeepestError::new();

    loop {
        let (rest, _) = whitespace0(span)?;
        match cluster_member(rest, &mut deepest) {
            Some((tail, member)) => {
                match member {
                    Member::Revision(r) => cluster.revision = r,
                    Member::Attribute(a) => cluster.attributes.push(a),
                    Member::Command(c) => cluster.commands.push(c),
                    Member::Event(e) => cluster.events.push(e),
                    Member::TypeDefinition => {}
                }
                span = tail;
            }
            None => {
                span = rest;
                break;
            }
        }
    }

    match tag("}")(span) {
        Ok((rest, _)) => Ok((rest, cluster)),
        Err(e) => Err(deepest.or(e)),
    }
}

fn endpoint(span: Span) -> IResult<Span, (), ParseError> {
    value(
        (),
        tuple((
            keyword("endpoint"),
            whitespace1,
            positive_integer,
            whitespace0,
            braced_block,
        )),
    )
    .parse(span)
}

#[derive(Debug, Clone)]
enum Item<'a> {
    Cluster(IdlCluster<'a>),
    Skipped(&'static str),
    Whitespace,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Failed to parse IDL.")]
#[diagnostic(
    code(matter::schema::idl::parse),
    help("Failed to parse IDL. Check IDL format")
)]
pub struct IdlParsingError {
    #[source_code]
    pub src: NamedSource,

    #[label("Parse error location")]
    pub error_location: SourceSpan,
}

impl IdlParsingError {
    fn from<'a>(input: Span<'a>, span: Span<'a>, error: nom::Err<ParseError<'a>>) -> Self {
        let pos = match error.deepest_index() {
            None => input.len() - span.len(),
            Some(error_pos) => error_pos,
        };

        warn!("IDL parse error: {:?}", error);

        IdlParsingError {
            src: NamedSource::new("input idl", input.fragment().to_string()),
            error_location: (pos, 1).into(),
        }
    }
}

/// Errors of [`load`]: the text is not valid IDL, or its clusters violate
/// the schema invariants.
#[derive(Error, Diagnostic, Debug)]
pub enum LoadError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] IdlParsingError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),
}

/// Parse all top-level cluster definitions of an IDL file.
pub fn parse_clusters(text: &str) -> Result<Vec<IdlCluster<'_>>, IdlParsingError> {
    let input = Span::new(text);
    let mut clusters = Vec::new();

    let mut span = input;
    while !span.is_empty() {
        let (rest, item) = alt((
            cluster.map(Item::Cluster),
            value(Item::Skipped("endpoint"), endpoint),
            value(
                Item::Skipped("type definition"),
                preceded(tuple((api_maturity, whitespace0)), type_definition),
            ),
            value(Item::Whitespace, whitespace1),
        ))
        .parse(span)
        .map_err(|e| IdlParsingError::from(input, span, e))?;

        match item {
            Item::Cluster(c) => clusters.push(c),
            Item::Skipped(what) => debug!(
                "Skipping top-level {what} at line {}",
                span.location_line()
            ),
            Item::Whitespace => (),
        }
        span = rest;
    }

    Ok(clusters)
}

/// Parse an IDL file into cluster schemas.
pub fn load(text: &str) -> Result<Vec<ClusterSchema>, LoadError> {
    let schemas = parse_clusters(text)?
        .iter()
        .map(IdlCluster::to_schema)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} clusters from IDL", schemas.len());

    Ok(schemas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::FieldKind;
    use rstest::rstest;

    fn assert_parse_ok<R: PartialEq + std::fmt::Debug>(
        parsed: IResult<Span, R, ParseError>,
        expected: R,
    ) {
        let (rest, actual) = parsed.expect("Parse should have succeeded");
        assert_eq!(actual, expected);
        assert_eq!(*rest.fragment(), "", "input should be fully consumed");
    }

    fn field(name: &str, code: u64) -> IdlField<'_> {
        IdlField { name, code }
    }

    const ON_OFF: &str = r#"
        /** Attributes and commands for switching devices between 'On' and 'Off' states. */
        server cluster OnOff = 6 {
          revision 6;

          enum DelayedAllOffEffectVariantEnum : enum8 {
            kDelayedOffFastFade = 0;
            kNoFade = 1;
          }

          bitmap Feature : bitmap32 {
            kLighting = 0x1;
          }

          request struct OffWithEffectRequest {
            EffectIdentifierEnum effectIdentifier = 0;
            enum8 effectVariant = 1;
          }

          readonly attribute boolean onOff = 0;
          readonly attribute optional boolean globalSceneControl = 16384;
          attribute optional int16u onTime = 16385;
          attribute access(write: manage) optional nullable StartUpOnOffEnum startUpOnOff = 16387;
          readonly attribute command_id generatedCommandList[] = 65528;
          readonly attribute int16u clusterRevision = 65533;

          // the basic commands
          command Off(): DefaultSuccess = 0;
          command On(): DefaultSuccess = 1;
          command Toggle(): DefaultSuccess = 2;
          command OffWithEffect(OffWithEffectRequest): DefaultSuccess = 64;
        }
    "#;

    #[rstest]
    #[case("readonly attribute int16u clusterRevision = 65533;", field("clusterRevision", 65533))]
    #[case("attribute access(read: manage, write: administer) optional nullable char_string<32> nodeLabel = 0x5;", field("nodeLabel", 5))]
    #[case("readonly nosubscribe attribute event_id eventList[] = 65530;", field("eventList", 65530))]
    #[case("timedwrite attribute provisional fabric_sensitive int8u  /* comment */ foo = 12 ;", field("foo", 12))]
    fn test_attribute(#[case] input: &str, #[case] expected: IdlField) {
        assert_parse_ok(attribute(input.into()), expected);
    }

    #[rstest]
    #[case("command Off(): DefaultSuccess = 0;", field("Off", 0))]
    #[case("timed command access(invoke: administer) OpenCommissioningWindow(OpenCommissioningWindowRequest): DefaultSuccess = 0;",
           field("OpenCommissioningWindow", 0))]
    #[case("fabric command access(invoke: administer) AddNOC(AddNOCRequest): NOCResponse = 6;", field("AddNOC", 6))]
    fn test_command(#[case] input: &str, #[case] expected: IdlField) {
        assert_parse_ok(command(input.into()), expected);
    }

    #[rstest]
    #[case("info event StateChange = 0 { boolean stateValue = 0; }", field("StateChange", 0))]
    #[case("critical event StartUp = 0 {\n  int32u softwareVersion = 0;\n}", field("StartUp", 0))]
    #[case("fabric_sensitive info event access(read: administer) AccessControlEntryChanged = 0 { nullable node_id adminNodeID = 1; fabric_idx fabricIndex = 254; }",
           field("AccessControlEntryChanged", 0))]
    #[case("debug event Empty = 0x10 {}", field("Empty", 16))]
    fn test_event(#[case] input: &str, #[case] expected: IdlField) {
        assert_parse_ok(event(input.into()), expected);
    }

    #[rstest]
    #[case("enum StatusEnum : enum8 { kOk = 0; kFailure = 1; }")]
    #[case("bitmap Feature : bitmap32 { kLighting = 0x1; }")]
    #[case("fabric_scoped struct Entry { fabric_idx fabricIndex = 254; }")]
    #[case("response struct QueryImageResponse = 1 { StatusEnum status = 0; }")]
    #[case("shared enum AreaTypeTag : enum8 { kAisle = 0; }")]
    fn test_type_definition(#[case] input: &str) {
        assert_parse_ok(type_definition(input.into()), ());
    }

    #[rstest]
    #[case("{}")]
    #[case("{ { nested } { } }")]
    #[case(r#"{ "a } in a string" }"#)]
    #[case(r#"{ "escaped \" quote }" }"#)]
    #[case("{ // comment with }\n }")]
    #[case("{ /* } */ }")]
    fn test_braced_block(#[case] input: &str) {
        assert_parse_ok(braced_block(input.into()), ());
    }

    #[rstest]
    #[case("{")]
    #[case("{ { }")]
    #[case("{ /* } ")]
    #[case(r#"{ "}"#)]
    fn test_unbalanced_block(#[case] input: &str) {
        assert!(braced_block(input.into()).is_err());
    }

    #[test]
    fn keywords_need_a_boundary() {
        assert!(keyword("event")("event Foo".into()).is_ok());
        assert!(keyword("event")("EVENT Foo".into()).is_ok());
        assert!(keyword("event")("eventList".into()).is_err());
        assert_eq!(
            api_maturity("internalFoo".into()).expect("never fails").1,
            ApiMaturity::Stable
        );
    }

    #[test]
    fn parse_cluster() {
        let clusters = parse_clusters(ON_OFF).expect("valid IDL");
        assert_eq!(clusters.len(), 1);

        let on_off = &clusters[0];
        assert_eq!(on_off.name, "OnOff");
        assert_eq!(on_off.code, 6);
        assert_eq!(on_off.revision, 6);
        assert_eq!(on_off.maturity, ApiMaturity::Stable);
        assert_eq!(on_off.attributes.len(), 6);
        assert!(on_off.events.is_empty());
        assert_eq!(
            on_off.commands,
            vec![
                field("Off", 0),
                field("On", 1),
                field("Toggle", 2),
                field("OffWithEffect", 64)
            ]
        );
    }

    #[test]
    fn skips_endpoints_and_shared_types() {
        let text = r#"
            shared enum TestGlobalEnum : enum8 { kSomeValue = 0; }

            provisional client cluster Test = 0xFFF1FC10 {
              info event Ping = 1 {}
            }

            endpoint 0 {
              device type ma_rootdevice = 22, version 1;
              server cluster Test {
                ram attribute description default = "{ not a block";
              }
            }
        "#;

        let clusters = parse_clusters(text).expect("valid IDL");
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].maturity, ApiMaturity::Provisional);
        assert_eq!(clusters[0].events, vec![field("Ping", 1)]);
    }

    #[test]
    fn parse_error_location() {
        let text = "cluster X = 1 {\n  attribute int8u foo = ;\n}";
        let err = parse_clusters(text).expect_err("missing attribute code");

        // points into the broken attribute, not at the cluster start
        assert!(err.error_location.offset() > text.find("attribute").expect("present"));
    }

    #[test]
    fn to_schema() {
        let schema = parse_clusters(ON_OFF).expect("valid IDL")[0]
            .to_schema()
            .expect("valid cluster");

        assert_eq!(schema.id(), 6);
        assert_eq!(schema.name(), "OnOff");
        assert_eq!(schema.field_id(FieldKind::Attribute, "StartUpOnOff"), Ok(16387));
        assert_eq!(schema.field_name(FieldKind::Attribute, 65533), Ok("ClusterRevision"));
        assert_eq!(schema.field_id(FieldKind::Command, "OffWithEffect"), Ok(64));
    }

    #[test]
    fn code_out_of_range() {
        let cluster = IdlCluster {
            name: "Huge",
            code: 0x1_0000_0000,
            ..Default::default()
        };

        assert_eq!(
            cluster.to_schema(),
            Err(BuildError::IdOutOfRange {
                what: "Cluster",
                code: 0x1_0000_0000
            })
        );
    }

    #[test]
    fn load_rejects_duplicate_fields() {
        let text = "cluster X = 1 { command A(): DefaultSuccess = 0; command B(): DefaultSuccess = 0; }";

        assert!(matches!(
            load(text),
            Err(LoadError::Build(BuildError::DuplicateFieldId { id: 0, .. }))
        ));
    }
}
