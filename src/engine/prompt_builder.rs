/// Persona used for the opening and for continuations.
pub const STORY_SYSTEM_PROMPT: &str =
    "Vous êtes un générateur d'histoires interactives en français.";

/// Persona used when asking for the next three options.
pub const CHOICES_SYSTEM_PROMPT: &str =
    "Vous êtes un générateur de choix pour des histoires interactives.";

/// Builds the prompts sent to the text and image models.
/// Only formats text: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn story_opening(theme: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Générez une histoire interactive en français sur le thème '{}'.\n",
            theme
        ));
        prompt.push_str("L'histoire doit commencer par une introduction captivante.\n");
        push_no_choices_rule(&mut prompt, "seulement le début de l'histoire");

        prompt
    }

    pub fn continuation(story_so_far: &str, choice: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str("Voici l'histoire jusqu'à présent : ");
        prompt.push_str(story_so_far);
        prompt.push_str("\n\n");

        prompt.push_str("Le lecteur a choisi : ");
        prompt.push_str(choice);
        prompt.push_str("\n\n");

        prompt.push_str(
            "Continuez l'histoire en tenant compte du choix et du contexte précédent.\n",
        );
        push_no_choices_rule(&mut prompt, "seulement la continuation de l'histoire");

        prompt
    }

    pub fn choices(story: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str("Générez exactement trois choix pour la suite de cette histoire :\n");
        prompt.push_str(story);
        prompt.push_str("\n\n");

        prompt.push_str(
            "Les deux premiers choix doivent être des options intéressantes et positives.\n\
Le troisième choix doit être une mauvaise option menant à une issue terrible.\n\n",
        );
        push_choices_format(&mut prompt);

        prompt
    }

    pub fn illustration(theme: &str) -> String {
        format!(
            "Une illustration représentant le thème '{}' pour une histoire interactive",
            theme
        )
    }
}

fn push_no_choices_rule(prompt: &mut String, scope: &str) {
    prompt.push_str(&format!(
        "N'incluez pas de choix dans cette partie, {}.\n",
        scope
    ));
}

fn push_choices_format(prompt: &mut String) {
    prompt.push_str(
        "Format de réponse attendu :\n\
1. [Premier choix positif]\n\
2. [Deuxième choix positif]\n\
3. [Choix négatif]\n\n\
Assurez-vous que chaque choix soit complet et clairement formulé.\n",
    );
}
