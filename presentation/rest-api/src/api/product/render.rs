use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::dto::{ProductListResponse, ProductResponse};

#[derive(Debug, thiserror::Error)]
#[error("xml.render_error: {0}")]
pub struct XmlRenderError(String);

fn xml_error(error: impl std::fmt::Display) -> XmlRenderError {
    XmlRenderError(error.to_string())
}

/// Renders the listing as `<products><product><id/><name/><price/></product>...</products>`
/// preceded by an XML declaration. Text content is escaped.
pub fn products_to_xml(list: &ProductListResponse) -> Result<String, XmlRenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("products")))
        .map_err(xml_error)?;
    for product in &list.products {
        write_product(&mut writer, product)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new("products")))
        .map_err(xml_error)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
}

fn write_product(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    product: &ProductResponse,
) -> Result<(), XmlRenderError> {
    writer
        .write_event(Event::Start(BytesStart::new("product")))
        .map_err(xml_error)?;
    write_text_element(writer, "id", &product.id)?;
    write_text_element(writer, "name", &product.name)?;
    // `Display` for f64 drops the fractional part of integral values (100.0 -> "100").
    write_text_element(writer, "price", &product.price.to_string())?;
    writer
        .write_event(Event::End(BytesEnd::new("product")))
        .map_err(xml_error)?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<(), XmlRenderError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)?;
    Ok(())
}
