mod generate_form;
mod note_form;
mod note_list;

pub use generate_form::GenerateNoteForm;
pub use note_form::NoteForm;
pub use note_list::NoteList;
