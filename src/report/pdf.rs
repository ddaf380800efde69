//! 배치된 페이지를 printpdf로 그린다.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, Point};

use crate::ledger::RoomLedger;

use super::layout::{self, DrawItem, PageModel, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::{rows, ReceiptLayout, ReportError, ReportLabels};

/// PDF 글꼴 선택. 라틴 문자 외의 글자는 외부 TTF가 있어야 제대로 찍힌다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PdfFont {
    /// 내장 Helvetica
    #[default]
    Builtin,
    /// 사용자가 지정했거나 찾아낸 TTF 파일
    External(String),
}

impl PdfFont {
    /// 설정된 경로를 쓰고, 없으면 [`font_candidates`]에서 찾는다.
    pub fn from_config(path: Option<&str>) -> Self {
        match path {
            Some(p) if !p.trim().is_empty() => PdfFont::External(p.trim().to_string()),
            _ => match discover_font() {
                Some(found) => {
                    debug!("using discovered PDF font {}", found.display());
                    PdfFont::External(found.display().to_string())
                }
                None => PdfFont::Builtin,
            },
        }
    }

    /// 실제로 임베드할 TTF 경로. None이면 내장 글꼴.
    fn ttf_path(&self) -> Option<&Path> {
        match self {
            PdfFont::External(path) if Path::new(path).exists() => Some(Path::new(path)),
            PdfFont::External(path) => {
                warn!("PDF font not found: {path}, falling back to Helvetica");
                None
            }
            PdfFont::Builtin => None,
        }
    }
}

/// 한글/베트남어를 담을 수 있는 TTF 후보. 화면 글꼴도 같은 목록을 쓴다.
pub fn font_candidates() -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = ["assets/fonts/malgun.ttf", "assets/fonts/arial.ttf", "fonts/arial.ttf"]
        .iter()
        .map(PathBuf::from)
        .collect();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        out.extend(["malgun.ttf", "arial.ttf"].iter().map(|f| fonts.join(f)));
    }
    out
}

pub fn discover_font() -> Option<PathBuf> {
    font_candidates().into_iter().find(|p| p.exists())
}

/// cp1252에서 Latin-1과 겹치지 않는 글자.
const WINANSI_EXTRA: &[char] = &[
    '€', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', 'Ž', '‘', '’', '“', '”', '•', '–',
    '—', '˜', '™', 'š', '›', 'œ', 'ž', 'Ÿ',
];

/// 내장 글꼴(WinAnsi 인코딩)로 찍을 수 있는 글자인지.
pub fn is_winansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WINANSI_EXTRA.contains(&c)
}

/// 내장 글꼴로 찍으면 글자가 빠지는 첫 문자열.
pub fn first_unencodable(pages: &[PageModel]) -> Option<&str> {
    pages
        .iter()
        .flat_map(|p| p.texts())
        .find(|t| !t.chars().all(is_winansi))
}

fn load_fonts(
    doc: &PdfDocumentReference,
    ttf: Option<&Path>,
) -> Result<(IndirectFontRef, IndirectFontRef), ReportError> {
    if let Some(path) = ttf {
        let regular = doc.add_external_font(BufReader::new(File::open(path)?))?;
        // 굵은 글꼴은 따로 받지 않으므로 같은 글꼴을 쓴다.
        return Ok((regular.clone(), regular));
    }
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    Ok((regular, bold))
}

/// 페이지 모델을 PDF 바이트로 만든다.
/// 내장 글꼴로 표현할 수 없는 글자가 있으면 파일을 만들지 않고 `MissingGlyphs`를 돌려준다.
pub fn paint(pages: &[PageModel], title: &str, font: &PdfFont) -> Result<Vec<u8>, ReportError> {
    let ttf = font.ttf_path();
    if ttf.is_none() {
        if let Some(text) = first_unencodable(pages) {
            warn!("built-in PDF font cannot encode '{text}'");
            return Err(ReportError::MissingGlyphs(text.to_string()));
        }
    }
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let (regular, bold) = load_fonts(&doc, ttf)?;

    let mut first = Some((first_page, first_layer));
    for page in pages {
        let (page_idx, layer_idx) = match first.take() {
            Some(indices) => indices,
            None => doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"),
        };
        let canvas = doc.get_page(page_idx).get_layer(layer_idx);
        for item in &page.items {
            match item {
                DrawItem::Text {
                    x,
                    y,
                    size,
                    bold: is_bold,
                    text,
                } => {
                    let font_ref = if *is_bold { &bold } else { &regular };
                    canvas.use_text(text.as_str(), *size, Mm(*x), Mm(*y), font_ref);
                }
                DrawItem::Rule { x1, x2, y } => {
                    canvas.add_line(Line {
                        points: vec![
                            (Point::new(Mm(*x1), Mm(*y)), false),
                            (Point::new(Mm(*x2), Mm(*y)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }
    debug!("painted {} PDF page(s) for '{title}'", pages.len());
    Ok(doc.save_to_bytes()?)
}

/// 방별 영수증 PDF.
pub fn render_receipts(
    ledger: &RoomLedger,
    layout: ReceiptLayout,
    labels: &ReportLabels,
    font: &PdfFont,
) -> Result<Vec<u8>, ReportError> {
    let receipts = rows::receipts(ledger, labels)?;
    let pages = layout::layout_receipts(&receipts, layout, labels);
    paint(&pages, &labels.receipt_title, font)
}

/// 방/합계/비고 요약표 PDF.
pub fn render_summary(
    ledger: &RoomLedger,
    labels: &ReportLabels,
    font: &PdfFont,
) -> Result<Vec<u8>, ReportError> {
    let summary = rows::summary_rows(ledger)?;
    let pages = layout::layout_summary(&summary, ledger.grand_total(), labels);
    paint(&pages, &labels.summary_title, font)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(text: &str) -> PageModel {
        PageModel {
            items: vec![DrawItem::Text {
                x: 20.0,
                y: 270.0,
                size: 10.0,
                bold: false,
                text: text.into(),
            }],
        }
    }

    #[test]
    fn winansi_covers_latin1_but_not_vietnamese_or_hangul() {
        assert!("Room fee: 2.100.000 m³ é".chars().all(is_winansi));
        assert!(is_winansi('€'));
        assert!(!is_winansi('ề'));
        assert!(!is_winansi('방'));
    }

    #[test]
    fn builtin_font_refuses_text_it_would_drop() {
        let pages = vec![page("ROOM 1"), page("TIỀN PHÒNG 1")];
        assert_eq!(first_unencodable(&pages), Some("TIỀN PHÒNG 1"));
        match paint(&pages, "t", &PdfFont::Builtin) {
            Err(ReportError::MissingGlyphs(text)) => assert_eq!(text, "TIỀN PHÒNG 1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn configured_path_wins_over_discovery() {
        assert_eq!(
            PdfFont::from_config(Some(" my.ttf ")),
            PdfFont::External("my.ttf".into())
        );
    }
}
