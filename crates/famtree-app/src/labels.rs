//! Display-language dictionary for form field labels. Unknown labels
//! pass through unchanged.

pub fn translate(label: &str) -> &str {
    match label {
        "name" => "imię i nazwisko",
        "gender" => "płeć",
        "first name" => "imię",
        "last name" => "nazwisko",
        "avatar" => "zdjęcie",
        "maiden" => "nazwisko panieńskie",
        "birth year" => "rok urodzenia",
        "death year" => "rok śmierci",
        "occupation" => "zawód",
        "location" => "miejscowość",
        "education" => "wykształcenie",
        "nationality" => "narodowość",
        "birth place" => "miejsce urodzenia",
        "death place" => "miejsce śmierci",
        "marriage date" => "data ślubu",
        "email" => "e-mail",
        "phone" => "telefon",
        "address" => "adres",
        "notes" => "notatki",
        other => other,
    }
}
