use lopdf::{Dictionary, Document, Object, Stream};
use pdf_nup::*;

/// Build an in-memory PDF whose pages carry distinguishable content streams.
fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for i in 0..num_pages {
        let content = format!("q 1 0 0 1 {} 0 cm Q", i);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

/// Content stream bytes of a page in `doc`.
fn page_content(doc: &Document, page_id: lopdf::ObjectId) -> Vec<u8> {
    let page_dict = doc.get_dictionary(page_id).unwrap();
    let contents_id = page_dict.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = doc.get_object(contents_id).unwrap().as_stream().unwrap();
    stream.content.clone()
}

#[test]
fn test_duplicate_order_sequence() {
    // copiesPerPage = 3, pageCount = 2 → [0,0,0,1,1,1]
    assert_eq!(duplicate_order(2, 3).unwrap(), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_duplicate_order_length_and_runs() {
    let order = duplicate_order(5, 4).unwrap();
    assert_eq!(order.len(), 20);
    for (i, chunk) in order.chunks(4).enumerate() {
        assert!(chunk.iter().all(|&idx| idx == i));
    }
}

#[tokio::test]
async fn test_duplicate_document_pages_and_order() {
    let doc = create_test_pdf(2);
    let options = DuplicateOptions { copies: 3 };

    let output = duplicate(&doc, &options).await.unwrap();
    let pages = output.get_pages();
    assert_eq!(pages.len(), 6);

    // Pages come out as [0,0,0,1,1,1]; content streams identify the source
    let expected = [0, 0, 0, 1, 1, 1];
    for (page_id, source_index) in pages.values().zip(expected) {
        let content = page_content(&output, *page_id);
        let expected_content = format!("q 1 0 0 1 {} 0 cm Q", source_index);
        assert_eq!(content, expected_content.into_bytes());
    }
}

#[tokio::test]
async fn test_duplicate_single_copy_is_identity_count() {
    let doc = create_test_pdf(4);
    let options = DuplicateOptions { copies: 1 };

    let output = duplicate(&doc, &options).await.unwrap();
    assert_eq!(output.get_pages().len(), 4);
}

#[tokio::test]
async fn test_duplicate_rejects_zero_copies() {
    let doc = create_test_pdf(2);
    let options = DuplicateOptions { copies: 0 };

    let result = duplicate(&doc, &options).await;
    assert!(matches!(result, Err(NupError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_duplicate_empty_document() {
    let doc = create_test_pdf(0);
    let options = DuplicateOptions::default();

    let result = duplicate(&doc, &options).await;
    assert!(matches!(result, Err(NupError::NoPages)));
}

#[tokio::test]
async fn test_duplicated_output_survives_roundtrip() {
    use tempfile::NamedTempFile;

    let doc = create_test_pdf(3);
    let output = duplicate(&doc, &DuplicateOptions { copies: 2 })
        .await
        .unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_pdf(output, temp.path()).await.unwrap();

    let loaded = load_pdf(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 6);
}

#[test]
fn test_duplicate_statistics() {
    let doc = create_test_pdf(4);
    let stats = duplicate_statistics(&doc, &DuplicateOptions { copies: 3 }).unwrap();
    assert_eq!(stats.source_pages, 4);
    assert_eq!(stats.copies, 3);
    assert_eq!(stats.output_pages, 12);

    let empty = create_test_pdf(0);
    let result = duplicate_statistics(&empty, &DuplicateOptions::default());
    assert!(matches!(result, Err(NupError::NoPages)));
}
