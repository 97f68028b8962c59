//! Tree-editing routines shared by the store implementations.
//!
//! These operate on the collaborator's own copy of the tree, never on the
//! tree held by a [`crate::session::Session`].

use crate::error::{FolioError, Result};
use crate::model::{new_id, Container, Document, Folder, Tree};
use crate::tree::find_folder;
use chrono::Utc;

/// Trims `value`, rejecting it if nothing is left.
pub fn non_blank(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FolioError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

fn find_folder_mut<'a>(folders: &'a mut [Folder], id: &str) -> Option<&'a mut Folder> {
    for folder in folders.iter_mut() {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find_folder_mut(&mut folder.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_document_mut<'a>(tree: &'a mut Tree, id: &str) -> Option<&'a mut Document> {
    if let Some(pos) = tree.documents.iter().position(|d| d.id == id) {
        return Some(&mut tree.documents[pos]);
    }
    find_document_in_folders_mut(&mut tree.folders, id)
}

fn find_document_in_folders_mut<'a>(folders: &'a mut [Folder], id: &str) -> Option<&'a mut Document> {
    for folder in folders.iter_mut() {
        if let Some(pos) = folder.documents.iter().position(|d| d.id == id) {
            return Some(&mut folder.documents[pos]);
        }
        if let Some(found) = find_document_in_folders_mut(&mut folder.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_folder(folders: &mut Vec<Folder>, id: &str) -> bool {
    if let Some(pos) = folders.iter().position(|f| f.id == id) {
        folders.remove(pos);
        return true;
    }
    folders.iter_mut().any(|f| remove_folder(&mut f.children, id))
}

fn remove_document(documents: &mut Vec<Document>, folders: &mut [Folder], id: &str) -> bool {
    if let Some(pos) = documents.iter().position(|d| d.id == id) {
        documents.remove(pos);
        return true;
    }
    folders
        .iter_mut()
        .any(|f| remove_document(&mut f.documents, &mut f.children, id))
}

pub fn create_folder(tree: &mut Tree, name: &str, parent_id: Option<&str>) -> Result<Folder> {
    let name = non_blank(name, "Folder name")?;
    let folder = Folder::new(new_id(), name);

    match parent_id {
        Some(parent_id) => {
            let parent = find_folder_mut(&mut tree.folders, parent_id)
                .ok_or_else(|| FolioError::FolderNotFound(parent_id.to_string()))?;
            parent.children.push(folder.clone());
        }
        None => tree.folders.push(folder.clone()),
    }
    Ok(folder)
}

pub fn create_document(
    tree: &mut Tree,
    title: &str,
    content: &str,
    folder_id: Option<&str>,
) -> Result<Document> {
    let title = non_blank(title, "Document title")?;
    let document = Document::new(new_id(), title, content);

    match folder_id {
        Some(folder_id) => {
            let folder = find_folder_mut(&mut tree.folders, folder_id)
                .ok_or_else(|| FolioError::FolderNotFound(folder_id.to_string()))?;
            folder.documents.push(document.clone());
        }
        None => tree.documents.push(document.clone()),
    }
    Ok(document)
}

pub fn rename_folder(tree: &mut Tree, id: &str, name: &str) -> Result<()> {
    let name = non_blank(name, "Folder name")?;
    let folder = find_folder_mut(&mut tree.folders, id)
        .ok_or_else(|| FolioError::FolderNotFound(id.to_string()))?;
    folder.name = name;
    folder.updated_at = Utc::now();
    Ok(())
}

pub fn rename_document(tree: &mut Tree, id: &str, title: &str) -> Result<()> {
    let title = non_blank(title, "Document title")?;
    let document =
        find_document_mut(tree, id).ok_or_else(|| FolioError::DocumentNotFound(id.to_string()))?;
    document.title = title;
    document.updated_at = Utc::now();
    Ok(())
}

pub fn update_document_content(tree: &mut Tree, id: &str, content: &str) -> Result<()> {
    let document =
        find_document_mut(tree, id).ok_or_else(|| FolioError::DocumentNotFound(id.to_string()))?;
    document.content = content.to_string();
    document.updated_at = Utc::now();
    Ok(())
}

pub fn delete_folder(tree: &mut Tree, id: &str) -> Result<()> {
    let folder = find_folder(tree, id).ok_or_else(|| FolioError::FolderNotFound(id.to_string()))?;
    if !folder.has_no_content() {
        return Err(FolioError::FolderNotEmpty {
            id: id.to_string(),
            name: folder.name.clone(),
        });
    }
    remove_folder(&mut tree.folders, id);
    Ok(())
}

pub fn delete_document(tree: &mut Tree, id: &str) -> Result<()> {
    if remove_document(&mut tree.documents, &mut tree.folders, id) {
        Ok(())
    } else {
        Err(FolioError::DocumentNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Folder, Tree};
    use crate::tree::{find_document, validate};

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("  Work ", "Folder name").unwrap(), "Work");
        match non_blank(" \t", "Folder name") {
            Err(FolioError::Validation(msg)) => assert_eq!(msg, "Folder name cannot be empty"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    fn tree() -> Tree {
        Tree::new().with_folder(
            Folder::new("a", "A").with_folder(
                Folder::new("b", "B").with_document(Document::new("deep", "Deep", "body")),
            ),
        )
    }

    #[test]
    fn creates_nested_folder_at_end() {
        let mut t = tree();
        create_folder(&mut t, "first", Some("b")).unwrap();
        let created = create_folder(&mut t, "  second  ", Some("b")).unwrap();
        assert_eq!(created.name, "second");

        let b = find_folder(&t, "b").unwrap();
        let names: Vec<_> = b.children.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(validate(&t).is_ok());
    }

    #[test]
    fn rejects_blank_names() {
        let mut t = tree();
        assert!(matches!(
            create_folder(&mut t, "   ", None),
            Err(FolioError::Validation(_))
        ));
        assert!(matches!(
            create_document(&mut t, "", "x", None),
            Err(FolioError::Validation(_))
        ));
        assert!(matches!(
            rename_document(&mut t, "deep", " "),
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn unknown_parent_is_not_found() {
        let mut t = tree();
        assert!(matches!(
            create_document(&mut t, "Doc", "", Some("zzz")),
            Err(FolioError::FolderNotFound(_))
        ));
    }

    #[test]
    fn renames_and_updates_nested_document() {
        let mut t = tree();
        rename_document(&mut t, "deep", "Deeper").unwrap();
        update_document_content(&mut t, "deep", "new body").unwrap();
        let d = find_document(&t, "deep").unwrap();
        assert_eq!(d.title, "Deeper");
        assert_eq!(d.content, "new body");
        assert!(d.updated_at >= d.created_at);
    }

    #[test]
    fn refuses_to_delete_non_empty_folder() {
        let mut t = tree();
        match delete_folder(&mut t, "a") {
            Err(FolioError::FolderNotEmpty { id, name }) => {
                assert_eq!(id, "a");
                assert_eq!(name, "A");
            }
            other => panic!("expected FolderNotEmpty, got {:?}", other),
        }
        assert!(find_folder(&t, "a").is_some());
    }

    #[test]
    fn deletes_bottom_up() {
        let mut t = tree();
        delete_document(&mut t, "deep").unwrap();
        delete_folder(&mut t, "b").unwrap();
        delete_folder(&mut t, "a").unwrap();
        assert!(t.has_no_content());
        assert!(matches!(
            delete_document(&mut t, "deep"),
            Err(FolioError::DocumentNotFound(_))
        ));
    }
}
